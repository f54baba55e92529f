use crate::cpu::Cpu;
use crate::interrupts::InterruptController;
use crate::joypad::Joypad;
use crate::memory_bus::MemoryBus;
use crate::ppu::Ppu;

/// CPU cycles in one 60 Hz frame (4.194304 MHz / 60).
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// The assembled machine: CPU, PPU, interrupt controller and joypad
/// around the shared memory bus, serialized by the frame loop.
pub struct System {
    pub cpu: Cpu,
    pub ppu: Ppu,
    pub bus: MemoryBus,
    pub irq: InterruptController,
    pub joypad: Joypad,
}

impl System {
    pub fn new() -> Self {
        System {
            cpu: Cpu::new(),
            ppu: Ppu::new(),
            bus: MemoryBus::new(),
            irq: InterruptController::new(),
            joypad: Joypad::new(),
        }
    }

    /// Builds a system with the given cartridge image already loaded.
    pub fn with_rom(rom_data: &[u8]) -> Result<Self, String> {
        let mut system = System::new();
        system.bus.load_rom(rom_data)?;
        Ok(system)
    }

    /// Executes one instruction, clocks the PPU with its cycles, then
    /// runs interrupt dispatch (whose cycles are also fed to the PPU).
    /// Returns the total cycles consumed.
    pub fn step(&mut self) -> Result<u32, String> {
        let mut cycles = self.cpu.step(&mut self.bus, &self.irq)? as u32;
        self.ppu.advance(cycles, &mut self.bus, &mut self.irq);

        let dispatch_cycles = self.irq.dispatch(&mut self.cpu, &mut self.bus) as u32;
        if dispatch_cycles > 0 {
            self.ppu.advance(dispatch_cycles, &mut self.bus, &mut self.irq);
            cycles += dispatch_cycles;
        }
        Ok(cycles)
    }

    /// Runs the CPU until the per-frame cycle budget is spent.
    pub fn run_frame(&mut self) -> Result<(), String> {
        let mut cycles_this_frame: u32 = 0;
        while cycles_this_frame < CYCLES_PER_FRAME {
            cycles_this_frame += self.step()?;
        }
        Ok(())
    }

    /// Rasterizes the background into the PPU's shade buffer.
    pub fn render(&mut self) {
        self.ppu.rasterize(&self.bus);
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
