use super::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;
use lazy_static::lazy_static;

/// One row of the primary opcode table.
///
/// `cycles` is the base cost (the not-taken cost for conditional
/// instructions); `execute` returns the extra cycles of a taken branch.
#[derive(Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>,
}

impl Instruction {
    pub const fn new(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        execute: fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>,
    ) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }

    pub const fn invalid() -> Self {
        Instruction {
            mnemonic: "INVALID",
            length: 1,
            cycles: 4,
            execute: Cpu::invalid_opcode,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $len, $cyc, $exec)
    };
}
macro_rules! invalid {
    () => {
        Instruction::invalid()
    };
}

lazy_static! {
    /// Primary opcode map (0x00 - 0xFF). 0xCB is routed to the bit/shift
    /// decoder by `Cpu::step` and never dispatches through this table.
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        // 0x00 - 0x0F
        instr!("NOP", 1, 4, Cpu::nop),
        instr!("LD BC, d16", 3, 12, Cpu::ld_bc_d16),
        instr!("LD (BC), A", 1, 8, Cpu::ld_bcp_a),
        instr!("INC BC", 1, 8, Cpu::inc_bc),
        instr!("INC B", 1, 4, Cpu::inc_b),
        instr!("DEC B", 1, 4, Cpu::dec_b),
        instr!("LD B, d8", 2, 8, Cpu::ld_b_d8),
        instr!("RLCA", 1, 4, Cpu::rlca),
        instr!("LD (a16), SP", 3, 20, Cpu::ld_a16_sp),
        instr!("ADD HL, BC", 1, 8, Cpu::add_hl_bc),
        instr!("LD A, (BC)", 1, 8, Cpu::ld_a_bcp),
        instr!("DEC BC", 1, 8, Cpu::dec_bc),
        instr!("INC C", 1, 4, Cpu::inc_c),
        instr!("DEC C", 1, 4, Cpu::dec_c),
        instr!("LD C, d8", 2, 8, Cpu::ld_c_d8),
        instr!("RRCA", 1, 4, Cpu::rrca),
        // 0x10 - 0x1F
        instr!("STOP", 2, 4, Cpu::stop),
        instr!("LD DE, d16", 3, 12, Cpu::ld_de_d16),
        instr!("LD (DE), A", 1, 8, Cpu::ld_dep_a),
        instr!("INC DE", 1, 8, Cpu::inc_de),
        instr!("INC D", 1, 4, Cpu::inc_d),
        instr!("DEC D", 1, 4, Cpu::dec_d),
        instr!("LD D, d8", 2, 8, Cpu::ld_d_d8),
        instr!("RLA", 1, 4, Cpu::rla),
        instr!("JR r8", 2, 12, Cpu::jr_r8),
        instr!("ADD HL, DE", 1, 8, Cpu::add_hl_de),
        instr!("LD A, (DE)", 1, 8, Cpu::ld_a_dep),
        instr!("DEC DE", 1, 8, Cpu::dec_de),
        instr!("INC E", 1, 4, Cpu::inc_e),
        instr!("DEC E", 1, 4, Cpu::dec_e),
        instr!("LD E, d8", 2, 8, Cpu::ld_e_d8),
        instr!("RRA", 1, 4, Cpu::rra),
        // 0x20 - 0x2F
        instr!("JR NZ, r8", 2, 8, Cpu::jr_nz_r8),
        instr!("LD HL, d16", 3, 12, Cpu::ld_hl_d16),
        instr!("LD (HL+), A", 1, 8, Cpu::ld_hli_a),
        instr!("INC HL", 1, 8, Cpu::inc_hl),
        instr!("INC H", 1, 4, Cpu::inc_h),
        instr!("DEC H", 1, 4, Cpu::dec_h),
        instr!("LD H, d8", 2, 8, Cpu::ld_h_d8),
        instr!("DAA", 1, 4, Cpu::daa),
        instr!("JR Z, r8", 2, 8, Cpu::jr_z_r8),
        instr!("ADD HL, HL", 1, 8, Cpu::add_hl_hl),
        instr!("LD A, (HL+)", 1, 8, Cpu::ld_a_hli),
        instr!("DEC HL", 1, 8, Cpu::dec_hl),
        instr!("INC L", 1, 4, Cpu::inc_l),
        instr!("DEC L", 1, 4, Cpu::dec_l),
        instr!("LD L, d8", 2, 8, Cpu::ld_l_d8),
        instr!("CPL", 1, 4, Cpu::cpl),
        // 0x30 - 0x3F
        instr!("JR NC, r8", 2, 8, Cpu::jr_nc_r8),
        instr!("LD SP, d16", 3, 12, Cpu::ld_sp_d16),
        instr!("LD (HL-), A", 1, 8, Cpu::ld_hld_a),
        instr!("INC SP", 1, 8, Cpu::inc_sp),
        instr!("INC (HL)", 1, 12, Cpu::inc_hlp),
        instr!("DEC (HL)", 1, 12, Cpu::dec_hlp),
        instr!("LD (HL), d8", 2, 12, Cpu::ld_hlp_d8),
        instr!("SCF", 1, 4, Cpu::scf),
        instr!("JR C, r8", 2, 8, Cpu::jr_c_r8),
        instr!("ADD HL, SP", 1, 8, Cpu::add_hl_sp),
        instr!("LD A, (HL-)", 1, 8, Cpu::ld_a_hld),
        instr!("DEC SP", 1, 8, Cpu::dec_sp),
        instr!("INC A", 1, 4, Cpu::inc_a),
        instr!("DEC A", 1, 4, Cpu::dec_a),
        instr!("LD A, d8", 2, 8, Cpu::ld_a_d8),
        instr!("CCF", 1, 4, Cpu::ccf),
        // 0x40 - 0x47: LD B, r
        instr!("LD B, B", 1, 4, Cpu::ld_b_b),
        instr!("LD B, C", 1, 4, Cpu::ld_b_c),
        instr!("LD B, D", 1, 4, Cpu::ld_b_d),
        instr!("LD B, E", 1, 4, Cpu::ld_b_e),
        instr!("LD B, H", 1, 4, Cpu::ld_b_h),
        instr!("LD B, L", 1, 4, Cpu::ld_b_l),
        instr!("LD B, (HL)", 1, 8, Cpu::ld_b_hlp),
        instr!("LD B, A", 1, 4, Cpu::ld_b_a),
        // 0x48 - 0x4F: LD C, r
        instr!("LD C, B", 1, 4, Cpu::ld_c_b),
        instr!("LD C, C", 1, 4, Cpu::ld_c_c),
        instr!("LD C, D", 1, 4, Cpu::ld_c_d),
        instr!("LD C, E", 1, 4, Cpu::ld_c_e),
        instr!("LD C, H", 1, 4, Cpu::ld_c_h),
        instr!("LD C, L", 1, 4, Cpu::ld_c_l),
        instr!("LD C, (HL)", 1, 8, Cpu::ld_c_hlp),
        instr!("LD C, A", 1, 4, Cpu::ld_c_a),
        // 0x50 - 0x57: LD D, r
        instr!("LD D, B", 1, 4, Cpu::ld_d_b),
        instr!("LD D, C", 1, 4, Cpu::ld_d_c),
        instr!("LD D, D", 1, 4, Cpu::ld_d_d),
        instr!("LD D, E", 1, 4, Cpu::ld_d_e),
        instr!("LD D, H", 1, 4, Cpu::ld_d_h),
        instr!("LD D, L", 1, 4, Cpu::ld_d_l),
        instr!("LD D, (HL)", 1, 8, Cpu::ld_d_hlp),
        instr!("LD D, A", 1, 4, Cpu::ld_d_a),
        // 0x58 - 0x5F: LD E, r
        instr!("LD E, B", 1, 4, Cpu::ld_e_b),
        instr!("LD E, C", 1, 4, Cpu::ld_e_c),
        instr!("LD E, D", 1, 4, Cpu::ld_e_d),
        instr!("LD E, E", 1, 4, Cpu::ld_e_e),
        instr!("LD E, H", 1, 4, Cpu::ld_e_h),
        instr!("LD E, L", 1, 4, Cpu::ld_e_l),
        instr!("LD E, (HL)", 1, 8, Cpu::ld_e_hlp),
        instr!("LD E, A", 1, 4, Cpu::ld_e_a),
        // 0x60 - 0x67: LD H, r
        instr!("LD H, B", 1, 4, Cpu::ld_h_b),
        instr!("LD H, C", 1, 4, Cpu::ld_h_c),
        instr!("LD H, D", 1, 4, Cpu::ld_h_d),
        instr!("LD H, E", 1, 4, Cpu::ld_h_e),
        instr!("LD H, H", 1, 4, Cpu::ld_h_h),
        instr!("LD H, L", 1, 4, Cpu::ld_h_l),
        instr!("LD H, (HL)", 1, 8, Cpu::ld_h_hlp),
        instr!("LD H, A", 1, 4, Cpu::ld_h_a),
        // 0x68 - 0x6F: LD L, r
        instr!("LD L, B", 1, 4, Cpu::ld_l_b),
        instr!("LD L, C", 1, 4, Cpu::ld_l_c),
        instr!("LD L, D", 1, 4, Cpu::ld_l_d),
        instr!("LD L, E", 1, 4, Cpu::ld_l_e),
        instr!("LD L, H", 1, 4, Cpu::ld_l_h),
        instr!("LD L, L", 1, 4, Cpu::ld_l_l),
        instr!("LD L, (HL)", 1, 8, Cpu::ld_l_hlp),
        instr!("LD L, A", 1, 4, Cpu::ld_l_a),
        // 0x70 - 0x77: LD (HL), r / HALT
        instr!("LD (HL), B", 1, 8, Cpu::ld_hlp_b),
        instr!("LD (HL), C", 1, 8, Cpu::ld_hlp_c),
        instr!("LD (HL), D", 1, 8, Cpu::ld_hlp_d),
        instr!("LD (HL), E", 1, 8, Cpu::ld_hlp_e),
        instr!("LD (HL), H", 1, 8, Cpu::ld_hlp_h),
        instr!("LD (HL), L", 1, 8, Cpu::ld_hlp_l),
        instr!("HALT", 1, 4, Cpu::halt),
        instr!("LD (HL), A", 1, 8, Cpu::ld_hlp_a),
        // 0x78 - 0x7F: LD A, r
        instr!("LD A, B", 1, 4, Cpu::ld_a_b),
        instr!("LD A, C", 1, 4, Cpu::ld_a_c),
        instr!("LD A, D", 1, 4, Cpu::ld_a_d),
        instr!("LD A, E", 1, 4, Cpu::ld_a_e),
        instr!("LD A, H", 1, 4, Cpu::ld_a_h),
        instr!("LD A, L", 1, 4, Cpu::ld_a_l),
        instr!("LD A, (HL)", 1, 8, Cpu::ld_a_hlp),
        instr!("LD A, A", 1, 4, Cpu::ld_a_a),
        // 0x80 - 0x87: ADD
        instr!("ADD A, B", 1, 4, Cpu::add_a_b),
        instr!("ADD A, C", 1, 4, Cpu::add_a_c),
        instr!("ADD A, D", 1, 4, Cpu::add_a_d),
        instr!("ADD A, E", 1, 4, Cpu::add_a_e),
        instr!("ADD A, H", 1, 4, Cpu::add_a_h),
        instr!("ADD A, L", 1, 4, Cpu::add_a_l),
        instr!("ADD A, (HL)", 1, 8, Cpu::add_a_hlp),
        instr!("ADD A, A", 1, 4, Cpu::add_a_a),
        // 0x88 - 0x8F: ADC
        instr!("ADC A, B", 1, 4, Cpu::adc_a_b),
        instr!("ADC A, C", 1, 4, Cpu::adc_a_c),
        instr!("ADC A, D", 1, 4, Cpu::adc_a_d),
        instr!("ADC A, E", 1, 4, Cpu::adc_a_e),
        instr!("ADC A, H", 1, 4, Cpu::adc_a_h),
        instr!("ADC A, L", 1, 4, Cpu::adc_a_l),
        instr!("ADC A, (HL)", 1, 8, Cpu::adc_a_hlp),
        instr!("ADC A, A", 1, 4, Cpu::adc_a_a),
        // 0x90 - 0x97: SUB
        instr!("SUB A, B", 1, 4, Cpu::sub_a_b),
        instr!("SUB A, C", 1, 4, Cpu::sub_a_c),
        instr!("SUB A, D", 1, 4, Cpu::sub_a_d),
        instr!("SUB A, E", 1, 4, Cpu::sub_a_e),
        instr!("SUB A, H", 1, 4, Cpu::sub_a_h),
        instr!("SUB A, L", 1, 4, Cpu::sub_a_l),
        instr!("SUB A, (HL)", 1, 8, Cpu::sub_a_hlp),
        instr!("SUB A, A", 1, 4, Cpu::sub_a_a),
        // 0x98 - 0x9F: SBC
        instr!("SBC A, B", 1, 4, Cpu::sbc_a_b),
        instr!("SBC A, C", 1, 4, Cpu::sbc_a_c),
        instr!("SBC A, D", 1, 4, Cpu::sbc_a_d),
        instr!("SBC A, E", 1, 4, Cpu::sbc_a_e),
        instr!("SBC A, H", 1, 4, Cpu::sbc_a_h),
        instr!("SBC A, L", 1, 4, Cpu::sbc_a_l),
        instr!("SBC A, (HL)", 1, 8, Cpu::sbc_a_hlp),
        instr!("SBC A, A", 1, 4, Cpu::sbc_a_a),
        // 0xA0 - 0xA7: AND
        instr!("AND A, B", 1, 4, Cpu::and_a_b),
        instr!("AND A, C", 1, 4, Cpu::and_a_c),
        instr!("AND A, D", 1, 4, Cpu::and_a_d),
        instr!("AND A, E", 1, 4, Cpu::and_a_e),
        instr!("AND A, H", 1, 4, Cpu::and_a_h),
        instr!("AND A, L", 1, 4, Cpu::and_a_l),
        instr!("AND A, (HL)", 1, 8, Cpu::and_a_hlp),
        instr!("AND A, A", 1, 4, Cpu::and_a_a),
        // 0xA8 - 0xAF: XOR
        instr!("XOR A, B", 1, 4, Cpu::xor_a_b),
        instr!("XOR A, C", 1, 4, Cpu::xor_a_c),
        instr!("XOR A, D", 1, 4, Cpu::xor_a_d),
        instr!("XOR A, E", 1, 4, Cpu::xor_a_e),
        instr!("XOR A, H", 1, 4, Cpu::xor_a_h),
        instr!("XOR A, L", 1, 4, Cpu::xor_a_l),
        instr!("XOR A, (HL)", 1, 8, Cpu::xor_a_hlp),
        instr!("XOR A, A", 1, 4, Cpu::xor_a_a),
        // 0xB0 - 0xB7: OR
        instr!("OR A, B", 1, 4, Cpu::or_a_b),
        instr!("OR A, C", 1, 4, Cpu::or_a_c),
        instr!("OR A, D", 1, 4, Cpu::or_a_d),
        instr!("OR A, E", 1, 4, Cpu::or_a_e),
        instr!("OR A, H", 1, 4, Cpu::or_a_h),
        instr!("OR A, L", 1, 4, Cpu::or_a_l),
        instr!("OR A, (HL)", 1, 8, Cpu::or_a_hlp),
        instr!("OR A, A", 1, 4, Cpu::or_a_a),
        // 0xB8 - 0xBF: CP
        instr!("CP A, B", 1, 4, Cpu::cp_a_b),
        instr!("CP A, C", 1, 4, Cpu::cp_a_c),
        instr!("CP A, D", 1, 4, Cpu::cp_a_d),
        instr!("CP A, E", 1, 4, Cpu::cp_a_e),
        instr!("CP A, H", 1, 4, Cpu::cp_a_h),
        instr!("CP A, L", 1, 4, Cpu::cp_a_l),
        instr!("CP A, (HL)", 1, 8, Cpu::cp_a_hlp),
        instr!("CP A, A", 1, 4, Cpu::cp_a_a),
        // 0xC0 - 0xCF
        instr!("RET NZ", 1, 8, Cpu::ret_nz),
        instr!("POP BC", 1, 12, Cpu::pop_bc),
        instr!("JP NZ, a16", 3, 12, Cpu::jp_nz_a16),
        instr!("JP a16", 3, 16, Cpu::jp_a16),
        instr!("CALL NZ, a16", 3, 12, Cpu::call_nz_a16),
        instr!("PUSH BC", 1, 16, Cpu::push_bc),
        instr!("ADD A, d8", 2, 8, Cpu::add_a_d8),
        instr!("RST 00H", 1, 16, Cpu::rst_00),
        instr!("RET Z", 1, 8, Cpu::ret_z),
        instr!("RET", 1, 16, Cpu::ret),
        instr!("JP Z, a16", 3, 12, Cpu::jp_z_a16),
        instr!("PREFIX CB", 2, 8, Cpu::prefix_cb),
        instr!("CALL Z, a16", 3, 12, Cpu::call_z_a16),
        instr!("CALL a16", 3, 24, Cpu::call_a16),
        instr!("ADC A, d8", 2, 8, Cpu::adc_a_d8),
        instr!("RST 08H", 1, 16, Cpu::rst_08),
        // 0xD0 - 0xDF
        instr!("RET NC", 1, 8, Cpu::ret_nc),
        instr!("POP DE", 1, 12, Cpu::pop_de),
        instr!("JP NC, a16", 3, 12, Cpu::jp_nc_a16),
        invalid!(),
        instr!("CALL NC, a16", 3, 12, Cpu::call_nc_a16),
        instr!("PUSH DE", 1, 16, Cpu::push_de),
        instr!("SUB A, d8", 2, 8, Cpu::sub_a_d8),
        instr!("RST 10H", 1, 16, Cpu::rst_10),
        instr!("RET C", 1, 8, Cpu::ret_c),
        instr!("RETI", 1, 16, Cpu::reti),
        instr!("JP C, a16", 3, 12, Cpu::jp_c_a16),
        invalid!(),
        instr!("CALL C, a16", 3, 12, Cpu::call_c_a16),
        invalid!(),
        instr!("SBC A, d8", 2, 8, Cpu::sbc_a_d8),
        instr!("RST 18H", 1, 16, Cpu::rst_18),
        // 0xE0 - 0xEF
        instr!("LDH (a8), A", 2, 12, Cpu::ldh_a8_a),
        instr!("POP HL", 1, 12, Cpu::pop_hl),
        instr!("LD (C), A", 1, 8, Cpu::ld_cp_a),
        invalid!(),
        invalid!(),
        instr!("PUSH HL", 1, 16, Cpu::push_hl),
        instr!("AND A, d8", 2, 8, Cpu::and_a_d8),
        instr!("RST 20H", 1, 16, Cpu::rst_20),
        instr!("ADD SP, r8", 2, 16, Cpu::add_sp_r8),
        instr!("JP HL", 1, 4, Cpu::jp_hl),
        instr!("LD (a16), A", 3, 16, Cpu::ld_a16_a),
        invalid!(),
        invalid!(),
        invalid!(),
        instr!("XOR A, d8", 2, 8, Cpu::xor_a_d8),
        instr!("RST 28H", 1, 16, Cpu::rst_28),
        // 0xF0 - 0xFF
        instr!("LDH A, (a8)", 2, 12, Cpu::ldh_a_a8),
        instr!("POP AF", 1, 12, Cpu::pop_af),
        instr!("LD A, (C)", 1, 8, Cpu::ld_a_cp),
        instr!("DI", 1, 4, Cpu::di),
        invalid!(),
        instr!("PUSH AF", 1, 16, Cpu::push_af),
        instr!("OR A, d8", 2, 8, Cpu::or_a_d8),
        instr!("RST 30H", 1, 16, Cpu::rst_30),
        instr!("LD HL, SP+r8", 2, 12, Cpu::ld_hl_sp_r8),
        instr!("LD SP, HL", 1, 8, Cpu::ld_sp_hl),
        instr!("LD A, (a16)", 3, 16, Cpu::ld_a_a16),
        instr!("EI", 1, 4, Cpu::ei),
        invalid!(),
        invalid!(),
        instr!("CP A, d8", 2, 8, Cpu::cp_a_d8),
        instr!("RST 38H", 1, 16, Cpu::rst_38),
    ];
}
