use sdl2::pixels::Color;
use std::time::Duration;

pub use mochi::ppu::{GB_HEIGHT, GB_WIDTH};

// --- Timing ---
pub const TARGET_FPS: u64 = 60;
pub const TARGET_FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS);

// --- Screen scaling ---
pub const GB_SCALE_FACTOR: u32 = 3;
pub const WINDOW_WIDTH: u32 = GB_WIDTH as u32 * GB_SCALE_FACTOR;
pub const WINDOW_HEIGHT: u32 = GB_HEIGHT as u32 * GB_SCALE_FACTOR;

// --- Palette: shade index 0-3 to screen color ---
pub const PALETTE: [Color; 4] = [
    Color::RGB(0xFF, 0xFF, 0xFF), // White
    Color::RGB(0xC0, 0xC0, 0xC0), // Light gray
    Color::RGB(0x60, 0x60, 0x60), // Dark gray
    Color::RGB(0x00, 0x00, 0x00), // Black
];

pub const CLEAR_COLOR: Color = Color::RGB(0, 0, 0);
