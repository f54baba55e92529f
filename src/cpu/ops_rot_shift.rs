use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Accumulator rotates (non-prefixed). Unlike the CB forms, Z is
// always cleared. ---
impl Cpu {
    pub fn rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = self.rlc(self.regs.a);
        self.regs.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = self.rl(self.regs.a);
        self.regs.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = self.rrc(self.regs.a);
        self.regs.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = self.rr(self.regs.a);
        self.regs.set_flag(FLAG_Z, false);
        Ok(0)
    }
}
