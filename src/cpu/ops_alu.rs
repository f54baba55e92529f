use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Arithmetic/logic instruction handlers ---
impl Cpu {
    // ADD A, src
    alu_a_r!(add_a_b, add_a, b);
    alu_a_r!(add_a_c, add_a, c);
    alu_a_r!(add_a_d, add_a, d);
    alu_a_r!(add_a_e, add_a, e);
    alu_a_r!(add_a_h, add_a, h);
    alu_a_r!(add_a_l, add_a, l);
    alu_a_r!(add_a_a, add_a, a);
    alu_a_hlp!(add_a_hlp, add_a);
    alu_a_d8!(add_a_d8, add_a);

    // ADC A, src
    alu_a_r!(adc_a_b, add_a, b, carry);
    alu_a_r!(adc_a_c, add_a, c, carry);
    alu_a_r!(adc_a_d, add_a, d, carry);
    alu_a_r!(adc_a_e, add_a, e, carry);
    alu_a_r!(adc_a_h, add_a, h, carry);
    alu_a_r!(adc_a_l, add_a, l, carry);
    alu_a_r!(adc_a_a, add_a, a, carry);
    alu_a_hlp!(adc_a_hlp, add_a, carry);
    alu_a_d8!(adc_a_d8, add_a, carry);

    // SUB A, src
    alu_a_r!(sub_a_b, sub_a, b);
    alu_a_r!(sub_a_c, sub_a, c);
    alu_a_r!(sub_a_d, sub_a, d);
    alu_a_r!(sub_a_e, sub_a, e);
    alu_a_r!(sub_a_h, sub_a, h);
    alu_a_r!(sub_a_l, sub_a, l);
    alu_a_r!(sub_a_a, sub_a, a);
    alu_a_hlp!(sub_a_hlp, sub_a);
    alu_a_d8!(sub_a_d8, sub_a);

    // SBC A, src
    alu_a_r!(sbc_a_b, sub_a, b, carry);
    alu_a_r!(sbc_a_c, sub_a, c, carry);
    alu_a_r!(sbc_a_d, sub_a, d, carry);
    alu_a_r!(sbc_a_e, sub_a, e, carry);
    alu_a_r!(sbc_a_h, sub_a, h, carry);
    alu_a_r!(sbc_a_l, sub_a, l, carry);
    alu_a_r!(sbc_a_a, sub_a, a, carry);
    alu_a_hlp!(sbc_a_hlp, sub_a, carry);
    alu_a_d8!(sbc_a_d8, sub_a, carry);

    // AND A, src
    alu_a_r!(and_a_b, and_a, b);
    alu_a_r!(and_a_c, and_a, c);
    alu_a_r!(and_a_d, and_a, d);
    alu_a_r!(and_a_e, and_a, e);
    alu_a_r!(and_a_h, and_a, h);
    alu_a_r!(and_a_l, and_a, l);
    alu_a_r!(and_a_a, and_a, a);
    alu_a_hlp!(and_a_hlp, and_a);
    alu_a_d8!(and_a_d8, and_a);

    // XOR A, src
    alu_a_r!(xor_a_b, xor_a, b);
    alu_a_r!(xor_a_c, xor_a, c);
    alu_a_r!(xor_a_d, xor_a, d);
    alu_a_r!(xor_a_e, xor_a, e);
    alu_a_r!(xor_a_h, xor_a, h);
    alu_a_r!(xor_a_l, xor_a, l);
    alu_a_r!(xor_a_a, xor_a, a);
    alu_a_hlp!(xor_a_hlp, xor_a);
    alu_a_d8!(xor_a_d8, xor_a);

    // OR A, src
    alu_a_r!(or_a_b, or_a, b);
    alu_a_r!(or_a_c, or_a, c);
    alu_a_r!(or_a_d, or_a, d);
    alu_a_r!(or_a_e, or_a, e);
    alu_a_r!(or_a_h, or_a, h);
    alu_a_r!(or_a_l, or_a, l);
    alu_a_r!(or_a_a, or_a, a);
    alu_a_hlp!(or_a_hlp, or_a);
    alu_a_d8!(or_a_d8, or_a);

    // CP A, src
    alu_a_r!(cp_a_b, cp_a, b);
    alu_a_r!(cp_a_c, cp_a, c);
    alu_a_r!(cp_a_d, cp_a, d);
    alu_a_r!(cp_a_e, cp_a, e);
    alu_a_r!(cp_a_h, cp_a, h);
    alu_a_r!(cp_a_l, cp_a, l);
    alu_a_r!(cp_a_a, cp_a, a);
    alu_a_hlp!(cp_a_hlp, cp_a);
    alu_a_d8!(cp_a_d8, cp_a);

    // INC r / INC (HL)
    inc_r!(inc_b, b);
    inc_r!(inc_c, c);
    inc_r!(inc_d, d);
    inc_r!(inc_e, e);
    inc_r!(inc_h, h);
    inc_r!(inc_l, l);
    inc_r!(inc_a, a);
    pub fn inc_hlp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.regs.hl();
        let result = self.inc_u8(bus.read_byte(addr));
        bus.write_byte(addr, result);
        Ok(0)
    }

    // DEC r / DEC (HL)
    dec_r!(dec_b, b);
    dec_r!(dec_c, c);
    dec_r!(dec_d, d);
    dec_r!(dec_e, e);
    dec_r!(dec_h, h);
    dec_r!(dec_l, l);
    dec_r!(dec_a, a);
    pub fn dec_hlp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.regs.hl();
        let result = self.dec_u8(bus.read_byte(addr));
        bus.write_byte(addr, result);
        Ok(0)
    }

    // ADD HL, rr (Z unchanged)
    pub fn add_hl_bc(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.regs.bc());
        Ok(0)
    }
    pub fn add_hl_de(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.regs.de());
        Ok(0)
    }
    pub fn add_hl_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.regs.hl());
        Ok(0)
    }
    pub fn add_hl_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.regs.sp);
        Ok(0)
    }

    // ADD SP, r8
    pub fn add_sp_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        self.regs.sp = self.sp_plus_r8(offset);
        Ok(0)
    }

    // 16-bit INC/DEC (no flags)
    pub fn inc_bc(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_bc(self.regs.bc().wrapping_add(1));
        Ok(0)
    }
    pub fn inc_de(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_de(self.regs.de().wrapping_add(1));
        Ok(0)
    }
    pub fn inc_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_hl(self.regs.hl().wrapping_add(1));
        Ok(0)
    }
    pub fn inc_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(0)
    }
    pub fn dec_bc(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_bc(self.regs.bc().wrapping_sub(1));
        Ok(0)
    }
    pub fn dec_de(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_de(self.regs.de().wrapping_sub(1));
        Ok(0)
    }
    pub fn dec_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.set_hl(self.regs.hl().wrapping_sub(1));
        Ok(0)
    }
    pub fn dec_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        Ok(0)
    }

    // DAA: decimal adjust after a BCD add/subtract
    pub fn daa(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        let mut adjustment = 0u8;
        let mut set_carry = false;
        if !self.regs.flag(FLAG_N) {
            if self.regs.flag(FLAG_C) || self.regs.a > 0x99 {
                adjustment |= 0x60;
                set_carry = true;
            }
            if self.regs.flag(FLAG_H) || (self.regs.a & 0x0F) > 0x09 {
                adjustment |= 0x06;
            }
            self.regs.a = self.regs.a.wrapping_add(adjustment);
        } else {
            if self.regs.flag(FLAG_C) {
                adjustment |= 0x60;
                set_carry = true;
            }
            if self.regs.flag(FLAG_H) {
                adjustment |= 0x06;
            }
            self.regs.a = self.regs.a.wrapping_sub(adjustment);
        }
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
        self.regs.set_flag(FLAG_H, false);
        self.regs.set_flag(FLAG_C, set_carry);
        Ok(0)
    }

    // CPL
    pub fn cpl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
}
