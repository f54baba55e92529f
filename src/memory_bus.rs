use crate::memory_map::{ADDR_SPACE_SIZE, CART_CAPACITY};
use std::fmt;

/// The flat 16-bit address space behind every read and write in the core.
///
/// There is no banking and no access-class protection: every address in
/// [0, 0x10000) resolves to the single backing array. The ROM image is
/// copied in starting at 0x0000 and the rest of the array stays zeroed.
/// The one mirrored register, LY at 0xFF44, is kept in sync by the PPU.
#[derive(Clone)]
pub struct MemoryBus {
    mem: Box<[u8; ADDR_SPACE_SIZE]>,
    rom_len: usize,
}

impl MemoryBus {
    pub fn new() -> Self {
        MemoryBus {
            mem: Box::new([0; ADDR_SPACE_SIZE]),
            rom_len: 0,
        }
    }

    /// Copies a raw cartridge image into the address space from 0x0000.
    ///
    /// No header validation. Images above `CART_CAPACITY` are rejected;
    /// the flat mapping resolves only the first `ADDR_SPACE_SIZE` bytes,
    /// anything beyond that is ignored.
    pub fn load_rom(&mut self, rom_data: &[u8]) -> Result<(), String> {
        if rom_data.len() > CART_CAPACITY {
            return Err(format!(
                "ROM image is {} bytes, larger than the cartridge capacity of {} bytes",
                rom_data.len(),
                CART_CAPACITY
            ));
        }
        let mapped = rom_data.len().min(ADDR_SPACE_SIZE);
        self.mem[..mapped].copy_from_slice(&rom_data[..mapped]);
        self.rom_len = rom_data.len();
        log::info!("loaded ROM: {} bytes ({} mapped)", rom_data.len(), mapped);
        Ok(())
    }

    /// Number of bytes in the loaded cartridge image.
    pub fn rom_len(&self) -> usize {
        self.rom_len
    }

    #[inline(always)]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    // Writes below 0x8000 land in the array like any other; bank-switch
    // registers are not modeled.
    #[inline(always)]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    /// Reads a 16-bit word (little endian).
    pub fn read_word(&self, addr: u16) -> u16 {
        let low = self.read_byte(addr);
        let high = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Writes a 16-bit word (little endian).
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write_byte(addr, low);
        self.write_byte(addr.wrapping_add(1), high);
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBus")
            .field("rom_len", &self.rom_len)
            .finish_non_exhaustive()
    }
}
