use super::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;

// --- Load and stack instruction handlers ---
impl Cpu {
    // LD r, r'
    ld_r_r!(ld_b_b, b, b);
    ld_r_r!(ld_b_c, b, c);
    ld_r_r!(ld_b_d, b, d);
    ld_r_r!(ld_b_e, b, e);
    ld_r_r!(ld_b_h, b, h);
    ld_r_r!(ld_b_l, b, l);
    ld_r_r!(ld_b_a, b, a);
    ld_r_r!(ld_c_b, c, b);
    ld_r_r!(ld_c_c, c, c);
    ld_r_r!(ld_c_d, c, d);
    ld_r_r!(ld_c_e, c, e);
    ld_r_r!(ld_c_h, c, h);
    ld_r_r!(ld_c_l, c, l);
    ld_r_r!(ld_c_a, c, a);
    ld_r_r!(ld_d_b, d, b);
    ld_r_r!(ld_d_c, d, c);
    ld_r_r!(ld_d_d, d, d);
    ld_r_r!(ld_d_e, d, e);
    ld_r_r!(ld_d_h, d, h);
    ld_r_r!(ld_d_l, d, l);
    ld_r_r!(ld_d_a, d, a);
    ld_r_r!(ld_e_b, e, b);
    ld_r_r!(ld_e_c, e, c);
    ld_r_r!(ld_e_d, e, d);
    ld_r_r!(ld_e_e, e, e);
    ld_r_r!(ld_e_h, e, h);
    ld_r_r!(ld_e_l, e, l);
    ld_r_r!(ld_e_a, e, a);
    ld_r_r!(ld_h_b, h, b);
    ld_r_r!(ld_h_c, h, c);
    ld_r_r!(ld_h_d, h, d);
    ld_r_r!(ld_h_e, h, e);
    ld_r_r!(ld_h_h, h, h);
    ld_r_r!(ld_h_l, h, l);
    ld_r_r!(ld_h_a, h, a);
    ld_r_r!(ld_l_b, l, b);
    ld_r_r!(ld_l_c, l, c);
    ld_r_r!(ld_l_d, l, d);
    ld_r_r!(ld_l_e, l, e);
    ld_r_r!(ld_l_h, l, h);
    ld_r_r!(ld_l_l, l, l);
    ld_r_r!(ld_l_a, l, a);
    ld_r_r!(ld_a_b, a, b);
    ld_r_r!(ld_a_c, a, c);
    ld_r_r!(ld_a_d, a, d);
    ld_r_r!(ld_a_e, a, e);
    ld_r_r!(ld_a_h, a, h);
    ld_r_r!(ld_a_l, a, l);
    ld_r_r!(ld_a_a, a, a);

    // LD r, d8
    ld_r_d8!(ld_b_d8, b);
    ld_r_d8!(ld_c_d8, c);
    ld_r_d8!(ld_d_d8, d);
    ld_r_d8!(ld_e_d8, e);
    ld_r_d8!(ld_h_d8, h);
    ld_r_d8!(ld_l_d8, l);
    ld_r_d8!(ld_a_d8, a);

    // LD r, (HL)
    ld_r_hlp!(ld_b_hlp, b);
    ld_r_hlp!(ld_c_hlp, c);
    ld_r_hlp!(ld_d_hlp, d);
    ld_r_hlp!(ld_e_hlp, e);
    ld_r_hlp!(ld_h_hlp, h);
    ld_r_hlp!(ld_l_hlp, l);
    ld_r_hlp!(ld_a_hlp, a);

    // LD (HL), r
    ld_hlp_r!(ld_hlp_b, b);
    ld_hlp_r!(ld_hlp_c, c);
    ld_hlp_r!(ld_hlp_d, d);
    ld_hlp_r!(ld_hlp_e, e);
    ld_hlp_r!(ld_hlp_h, h);
    ld_hlp_r!(ld_hlp_l, l);
    ld_hlp_r!(ld_hlp_a, a);

    pub fn ld_hlp_d8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d8(bus);
        bus.write_byte(self.regs.hl(), value);
        Ok(0)
    }

    // LD rr, d16
    pub fn ld_bc_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.regs.set_bc(value);
        Ok(0)
    }
    pub fn ld_de_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.regs.set_de(value);
        Ok(0)
    }
    pub fn ld_hl_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.read_d16(bus);
        self.regs.set_hl(value);
        Ok(0)
    }
    pub fn ld_sp_d16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.sp = self.read_d16(bus);
        Ok(0)
    }

    // Indirect accumulator loads through BC/DE
    pub fn ld_bcp_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(self.regs.bc(), self.regs.a);
        Ok(0)
    }
    pub fn ld_dep_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(self.regs.de(), self.regs.a);
        Ok(0)
    }
    pub fn ld_a_bcp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = bus.read_byte(self.regs.bc());
        Ok(0)
    }
    pub fn ld_a_dep(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = bus.read_byte(self.regs.de());
        Ok(0)
    }

    // (HL) access with post-increment/decrement of HL
    pub fn ld_hli_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let hl = self.regs.hl();
        bus.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn ld_hld_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let hl = self.regs.hl();
        bus.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }
    pub fn ld_a_hli(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let hl = self.regs.hl();
        self.regs.a = bus.read_byte(hl);
        self.regs.set_hl(hl.wrapping_add(1));
        Ok(0)
    }
    pub fn ld_a_hld(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let hl = self.regs.hl();
        self.regs.a = bus.read_byte(hl);
        self.regs.set_hl(hl.wrapping_sub(1));
        Ok(0)
    }

    // LDH: page-0xFF00 access via 8-bit offset or via C
    pub fn ldh_a8_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        bus.write_byte(0xFF00 | offset as u16, self.regs.a);
        Ok(0)
    }
    pub fn ldh_a_a8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_d8(bus);
        self.regs.a = bus.read_byte(0xFF00 | offset as u16);
        Ok(0)
    }
    pub fn ld_cp_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        bus.write_byte(0xFF00 | self.regs.c as u16, self.regs.a);
        Ok(0)
    }
    pub fn ld_a_cp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = bus.read_byte(0xFF00 | self.regs.c as u16);
        Ok(0)
    }

    // Absolute 16-bit accumulator access
    pub fn ld_a16_a(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        bus.write_byte(addr, self.regs.a);
        Ok(0)
    }
    pub fn ld_a_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        self.regs.a = bus.read_byte(addr);
        Ok(0)
    }

    // LD (a16), SP: SP low byte at a16, high byte at a16+1
    pub fn ld_a16_sp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        bus.write_word(addr, self.regs.sp);
        Ok(0)
    }

    // SP <-> HL traffic
    pub fn ld_sp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.sp = self.regs.hl();
        Ok(0)
    }
    pub fn ld_hl_sp_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        let result = self.sp_plus_r8(offset);
        self.regs.set_hl(result);
        Ok(0)
    }

    // PUSH rr / POP rr
    pub fn push_bc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.regs.bc(), bus);
        Ok(0)
    }
    pub fn push_de(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.regs.de(), bus);
        Ok(0)
    }
    pub fn push_hl(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.regs.hl(), bus);
        Ok(0)
    }
    pub fn push_af(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.regs.af(), bus);
        Ok(0)
    }
    pub fn pop_bc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.regs.set_bc(value);
        Ok(0)
    }
    pub fn pop_de(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.regs.set_de(value);
        Ok(0)
    }
    pub fn pop_hl(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let value = self.pop_word(bus);
        self.regs.set_hl(value);
        Ok(0)
    }
    pub fn pop_af(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        // set_af masks the low nibble of F back to zero
        let value = self.pop_word(bus);
        self.regs.set_af(value);
        Ok(0)
    }
}
