use super::{Cpu, CpuMode, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Control-flow and machine-control handlers ---
impl Cpu {
    pub fn nop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Ok(0)
    }

    // JP a16 / JP HL / JP cc, a16
    fn jp_cond(&mut self, condition: bool, bus: &MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.regs.pc = addr;
            Ok(4) // 16 taken, 12 not taken
        } else {
            Ok(0)
        }
    }
    pub fn jp_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.pc = self.read_d16(bus);
        Ok(0)
    }
    pub fn jp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.pc = self.regs.hl();
        Ok(0)
    }
    pub fn jp_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jp_cond(!self.regs.flag(FLAG_Z), bus)
    }
    pub fn jp_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jp_cond(self.regs.flag(FLAG_Z), bus)
    }
    pub fn jp_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jp_cond(!self.regs.flag(FLAG_C), bus)
    }
    pub fn jp_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jp_cond(self.regs.flag(FLAG_C), bus)
    }

    // JR r8 / JR cc, r8: the sign-extended offset is added after PC has
    // passed the displacement byte.
    fn jr_cond(&mut self, condition: bool, bus: &MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        if condition {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            Ok(4) // 12 taken, 8 not taken
        } else {
            Ok(0)
        }
    }
    pub fn jr_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn jr_nz_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jr_cond(!self.regs.flag(FLAG_Z), bus)
    }
    pub fn jr_z_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jr_cond(self.regs.flag(FLAG_Z), bus)
    }
    pub fn jr_nc_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jr_cond(!self.regs.flag(FLAG_C), bus)
    }
    pub fn jr_c_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.jr_cond(self.regs.flag(FLAG_C), bus)
    }

    // CALL a16 / CALL cc, a16: stacks the address after the operand bytes
    fn call_cond(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.push_word(self.regs.pc, bus);
            self.regs.pc = addr;
            Ok(12) // 24 taken, 12 not taken
        } else {
            Ok(0)
        }
    }
    pub fn call_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        self.push_word(self.regs.pc, bus);
        self.regs.pc = addr;
        Ok(0)
    }
    pub fn call_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.call_cond(!self.regs.flag(FLAG_Z), bus)
    }
    pub fn call_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.call_cond(self.regs.flag(FLAG_Z), bus)
    }
    pub fn call_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.call_cond(!self.regs.flag(FLAG_C), bus)
    }
    pub fn call_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.call_cond(self.regs.flag(FLAG_C), bus)
    }

    // RET / RET cc / RETI: the return address is whatever is on the stack
    fn ret_cond(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        if condition {
            self.regs.pc = self.pop_word(bus);
            Ok(12) // 20 taken, 8 not taken
        } else {
            Ok(0)
        }
    }
    pub fn ret(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.pc = self.pop_word(bus);
        Ok(0)
    }
    pub fn ret_nz(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ret_cond(!self.regs.flag(FLAG_Z), bus)
    }
    pub fn ret_z(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ret_cond(self.regs.flag(FLAG_Z), bus)
    }
    pub fn ret_nc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ret_cond(!self.regs.flag(FLAG_C), bus)
    }
    pub fn ret_c(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ret_cond(self.regs.flag(FLAG_C), bus)
    }
    pub fn reti(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.pc = self.pop_word(bus);
        self.ime = true;
        self.ime_scheduled = false;
        Ok(0)
    }

    // RST n
    fn rst(&mut self, vector: u16, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.regs.pc, bus);
        self.regs.pc = vector;
        Ok(0)
    }
    pub fn rst_00(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0000, bus)
    }
    pub fn rst_08(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0008, bus)
    }
    pub fn rst_10(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0010, bus)
    }
    pub fn rst_18(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0018, bus)
    }
    pub fn rst_20(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0020, bus)
    }
    pub fn rst_28(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0028, bus)
    }
    pub fn rst_30(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0030, bus)
    }
    pub fn rst_38(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0038, bus)
    }

    // DI / EI
    pub fn di(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ime = false;
        self.ime_scheduled = false;
        Ok(0)
    }
    pub fn ei(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        // Committed at the start of the next step
        self.ime_scheduled = true;
        Ok(0)
    }

    // HALT / STOP
    pub fn halt(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.mode = CpuMode::Halted;
        Ok(0)
    }
    pub fn stop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.mode = CpuMode::Stopped;
        log::warn!("STOP executed at PC={:#06X}", self.instruction_pc);
        Ok(0)
    }

    // SCF / CCF
    pub fn scf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_flag(FLAG_N | FLAG_H, false);
        self.regs.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn ccf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        let carry = self.regs.flag(FLAG_C);
        self.regs.set_flag(FLAG_N | FLAG_H, false);
        self.regs.set_flag(FLAG_C, !carry);
        Ok(0)
    }

    // The 0xCB slot in the primary table; step() intercepts the prefix
    // before dispatch, so reaching this handler is a decoder bug.
    pub fn prefix_cb(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Err("0xCB prefix reached the primary dispatch table".to_string())
    }

    // Opcodes with no assigned encoding are a fatal decode error.
    pub fn invalid_opcode(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Err("unrecognized opcode".to_string())
    }
}
