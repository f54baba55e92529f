#![allow(dead_code)]

// --- Screen dimensions ---
pub const GB_WIDTH: usize = 160;
pub const GB_HEIGHT: usize = 144;
pub const FRAME_BUFFER_SIZE: usize = GB_WIDTH * GB_HEIGHT;

// --- Scanline timing (T-cycles) ---
pub const DOTS_PER_SCANLINE: u32 = 456;
pub const SCANLINES_PER_FRAME: u8 = 154; // 144 visible + 10 V-blank
pub const VBLANK_START_LINE: u8 = 144;

// --- Background map geometry ---
pub const TILE_SIZE: usize = 8;
pub const MAP_WIDTH_TILES: u16 = 32;

// --- LCDC flags (bit positions in 0xFF40) ---
pub const LCDC_TILE_DATA_AREA: u8 = 4; // 0 = signed from 0x9000, 1 = unsigned from 0x8000
