//! Instruction-level tests: flag contracts, stack behavior, cycle costs.

use mochi::cpu::{Cpu, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use mochi::interrupts::{Interrupt, InterruptController};
use mochi::memory_bus::MemoryBus;

/// Boots a CPU with `program` placed at the reset PC (0x0100).
fn setup(program: &[u8]) -> (Cpu, MemoryBus, InterruptController) {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    let mut bus = MemoryBus::new();
    bus.load_rom(&rom).unwrap();
    (Cpu::new(), bus, InterruptController::new())
}

fn step(cpu: &mut Cpu, bus: &mut MemoryBus, irq: &InterruptController) -> u16 {
    cpu.step(bus, irq).unwrap()
}

#[test]
fn reset_state() {
    let (cpu, _, _) = setup(&[0x00]);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.af(), 0);
    assert_eq!(cpu.regs.bc(), 0);
    assert_eq!(cpu.regs.de(), 0);
    assert_eq!(cpu.regs.hl(), 0);
}

#[test]
fn nop_costs_four_cycles() {
    let (mut cpu, mut bus, irq) = setup(&[0x00]);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 4);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn xor_a_clears_a_and_sets_z() {
    let (mut cpu, mut bus, irq) = setup(&[0xAF]);
    cpu.regs.a = 0x5A;
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0);
    assert_eq!(cpu.regs.f, FLAG_Z);
}

#[test]
fn add_a_half_carry() {
    // LD A, 0x0F; ADD A, A
    let (mut cpu, mut bus, irq) = setup(&[0x3E, 0x0F, 0x87]);
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x1E);
    assert_eq!(cpu.regs.f, FLAG_H);
}

#[test]
fn sub_d8_half_borrow() {
    // LD A, 0x10; SUB A, 0x01
    let (mut cpu, mut bus, irq) = setup(&[0x3E, 0x10, 0xD6, 0x01]);
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f, FLAG_N | FLAG_H);
}

#[test]
fn cp_sets_sub_flags_and_preserves_a() {
    let pairs = [
        (0x00u8, 0x00u8),
        (0x10, 0x01),
        (0x0F, 0xF0),
        (0xFF, 0xFF),
        (0x01, 0x02),
        (0x80, 0x7F),
    ];
    for &(a, x) in &pairs {
        let (mut cpu, mut bus, irq) = setup(&[0xFE, x]); // CP A, d8
        cpu.regs.a = a;
        step(&mut cpu, &mut bus, &irq);
        let cp_flags = cpu.regs.f;
        assert_eq!(cpu.regs.a, a, "CP must leave A untouched (A={:#04X})", a);

        let (mut cpu, mut bus, irq) = setup(&[0xD6, x]); // SUB A, d8
        cpu.regs.a = a;
        step(&mut cpu, &mut bus, &irq);
        assert_eq!(cp_flags, cpu.regs.f, "flags differ for A={:#04X} X={:#04X}", a, x);
    }
}

#[test]
fn push_pop_roundtrip() {
    // PUSH BC; POP BC
    let (mut cpu, mut bus, irq) = setup(&[0xC5, 0xC1]);
    cpu.regs.set_bc(0xBEEF);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.read_byte(0xFFFC), 0xEF); // low byte at the lower address
    assert_eq!(bus.read_byte(0xFFFD), 0xBE);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.bc(), 0xBEEF);
}

#[test]
fn pop_af_masks_flag_low_nibble() {
    // PUSH BC; POP AF
    let (mut cpu, mut bus, irq) = setup(&[0xC5, 0xF1]);
    cpu.regs.set_bc(0x12FF);
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
}

#[test]
fn call_ret_roundtrip() {
    // 0x0100: CALL 0x0108 ... 0x0108: RET
    let mut program = [0u8; 9];
    program[0] = 0xCD;
    program[1] = 0x08;
    program[2] = 0x01;
    program[8] = 0xC9;
    let (mut cpu, mut bus, irq) = setup(&program);

    assert_eq!(step(&mut cpu, &mut bus, &irq), 24);
    assert_eq!(cpu.regs.pc, 0x0108);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.read_word(0xFFFC), 0x0103);

    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn jr_backward_offset() {
    // JR -2 jumps onto itself
    let (mut cpu, mut bus, irq) = setup(&[0x18, 0xFE]);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn jr_conditional_cycle_costs() {
    // JR NZ with Z clear: taken, 12 cycles
    let (mut cpu, mut bus, irq) = setup(&[0x20, 0x05]);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(cpu.regs.pc, 0x0107);

    // JR Z with Z clear: not taken, 8 cycles
    let (mut cpu, mut bus, irq) = setup(&[0x28, 0x05]);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 8);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn ld_rr_d16_loads_immediate() {
    // LD BC, 0x1234; LD SP, 0xDFFE; LD HL, 0x9800
    let (mut cpu, mut bus, irq) = setup(&[0x01, 0x34, 0x12, 0x31, 0xFE, 0xDF, 0x21, 0x00, 0x98]);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(cpu.regs.bc(), 0x1234);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.sp, 0xDFFE);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.hl(), 0x9800);
    assert_eq!(cpu.regs.pc, 0x0109);
}

#[test]
fn ld_hli_hld_move_hl() {
    // LD (HL+), A; LD A, (HL-)
    let (mut cpu, mut bus, irq) = setup(&[0x22, 0x3A]);
    cpu.regs.a = 0x42;
    cpu.regs.set_hl(0xC000);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(bus.read_byte(0xC000), 0x42);
    assert_eq!(cpu.regs.hl(), 0xC001);
    bus.write_byte(0xC001, 0x99);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x99);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn ldh_accesses_high_page() {
    // LDH (0x80), A; LDH A, (0x81)
    let (mut cpu, mut bus, irq) = setup(&[0xE0, 0x80, 0xF0, 0x81]);
    cpu.regs.a = 0x77;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(bus.read_byte(0xFF80), 0x77);
    bus.write_byte(0xFF81, 0x33);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x33);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    // LD (0xC000), SP
    let (mut cpu, mut bus, irq) = setup(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xABCD;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 20);
    assert_eq!(bus.read_byte(0xC000), 0xCD);
    assert_eq!(bus.read_byte(0xC001), 0xAB);
}

#[test]
fn inc_dec_leave_carry_alone() {
    // SCF; INC B; DEC D
    let (mut cpu, mut bus, irq) = setup(&[0x37, 0x04, 0x15]);
    cpu.regs.b = 0x0F;
    cpu.regs.d = 0x10;
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.b, 0x10);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C); // half carry from bit 3, C untouched
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.d, 0x0F);
    assert_eq!(cpu.regs.f, FLAG_N | FLAG_H | FLAG_C);
}

#[test]
fn add_hl_keeps_z() {
    // ADD HL, BC with a zero result and Z previously set
    let (mut cpu, mut bus, irq) = setup(&[0xAF, 0x09]);
    cpu.regs.set_hl(0x8000);
    cpu.regs.set_bc(0x8000);
    step(&mut cpu, &mut bus, &irq); // XOR A sets Z
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_C); // Z survives, carry out of bit 15
}

#[test]
fn add_sp_r8_flags_from_low_byte() {
    // ADD SP, +8 at SP=0xFFF8 carries out of both nibble and byte
    let (mut cpu, mut bus, irq) = setup(&[0xE8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C);
}

#[test]
fn ld_hl_sp_r8_matches_add_sp_flags() {
    let (mut cpu, mut bus, irq) = setup(&[0xF8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0xFFF8);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C);
}

#[test]
fn daa_adjusts_bcd_addition() {
    // LD A, 0x45; ADD A, 0x38; DAA => 0x83 in BCD
    let (mut cpu, mut bus, irq) = setup(&[0x3E, 0x45, 0xC6, 0x38, 0x27]);
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.regs.flag(FLAG_C));
    assert!(!cpu.regs.flag(FLAG_H));
}

#[test]
fn rlca_shifts_bit7_into_carry() {
    let (mut cpu, mut bus, irq) = setup(&[0x07]);
    cpu.regs.a = 0x85;
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x0B);
    assert_eq!(cpu.regs.f, FLAG_C); // Z always cleared on the A rotates
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus, irq) = setup(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x35;
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0xCA);
    assert_eq!(cpu.regs.f, FLAG_N | FLAG_H);
    step(&mut cpu, &mut bus, &irq); // SCF
    assert_eq!(cpu.regs.f, FLAG_C);
    step(&mut cpu, &mut bus, &irq); // CCF toggles it back off
    assert_eq!(cpu.regs.f, 0);
}

#[test]
fn cb_swap_and_srl() {
    // SWAP A; SRL A
    let (mut cpu, mut bus, irq) = setup(&[0xCB, 0x37, 0xCB, 0x3F]);
    cpu.regs.a = 0xF0;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 8);
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f, 0);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.a, 0x07);
    assert_eq!(cpu.regs.f, FLAG_C);
}

#[test]
fn cb_bit_tests_without_writing() {
    // BIT 7, H twice, with the bit set then clear
    let (mut cpu, mut bus, irq) = setup(&[0xCB, 0x7C, 0xCB, 0x7C]);
    cpu.regs.h = 0x80;
    assert_eq!(step(&mut cpu, &mut bus, &irq), 8);
    assert_eq!(cpu.regs.h, 0x80);
    assert_eq!(cpu.regs.f, FLAG_H);
    cpu.regs.h = 0x00;
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_H);
}

#[test]
fn cb_res_set_on_memory() {
    // SET 7, (HL); RES 0, (HL)
    let (mut cpu, mut bus, irq) = setup(&[0xCB, 0xFE, 0xCB, 0x86]);
    cpu.regs.set_hl(0xC000);
    bus.write_byte(0xC000, 0x01);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(bus.read_byte(0xC000), 0x81);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(bus.read_byte(0xC000), 0x80);
}

#[test]
fn cb_bit_hl_costs_twelve() {
    let (mut cpu, mut bus, irq) = setup(&[0xCB, 0x46]); // BIT 0, (HL)
    cpu.regs.set_hl(0xC000);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 12);
}

#[test]
fn rst_jumps_to_vector() {
    let (mut cpu, mut bus, irq) = setup(&[0xEF]); // RST 28H
    assert_eq!(step(&mut cpu, &mut bus, &irq), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.read_word(0xFFFC), 0x0101);
}

#[test]
fn halt_waits_for_pending_interrupt() {
    let (mut cpu, mut bus, mut irq) = setup(&[0x76, 0x00]);
    step(&mut cpu, &mut bus, &irq); // HALT
    assert_eq!(cpu.mode(), mochi::cpu::CpuMode::Halted);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 4); // parked
    assert_eq!(cpu.regs.pc, 0x0101);
    irq.raise(Interrupt::VBlank);
    assert_eq!(step(&mut cpu, &mut bus, &irq), 4); // wake-up cycle
    assert_eq!(cpu.mode(), mochi::cpu::CpuMode::Running);
    step(&mut cpu, &mut bus, &irq);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn unknown_opcode_reports_byte_and_pc() {
    let (mut cpu, mut bus, irq) = setup(&[0xD3]);
    let err = cpu.step(&mut bus, &irq).unwrap_err();
    assert!(err.contains("0xD3"), "missing opcode byte: {}", err);
    assert!(err.contains("0x0100"), "missing fetch address: {}", err);
}

#[test]
fn opcode_table_is_well_formed() {
    for (opcode, instruction) in mochi::cpu::instruction::INSTRUCTIONS.iter().enumerate() {
        assert!(
            instruction.cycles >= 4 && instruction.cycles % 4 == 0,
            "opcode {:#04X} ({}) has cycle count {}",
            opcode,
            instruction.mnemonic,
            instruction.cycles
        );
        assert!(
            (1..=3).contains(&instruction.length),
            "opcode {:#04X} ({}) has length {}",
            opcode,
            instruction.mnemonic,
            instruction.length
        );
    }
}

#[test]
fn cycle_golden_table() {
    // Representative opcodes against their documented costs
    let golden: &[(&[u8], u16)] = &[
        (&[0x00], 4),              // NOP
        (&[0x01, 0x00, 0x00], 12), // LD BC, d16
        (&[0x04], 4),              // INC B
        (&[0x34], 12),             // INC (HL)
        (&[0x3E, 0x00], 8),        // LD A, d8
        (&[0x46], 8),              // LD B, (HL)
        (&[0x80], 4),              // ADD A, B
        (&[0x86], 8),              // ADD A, (HL)
        (&[0xC3, 0x00, 0x01], 16), // JP a16
        (&[0xC6, 0x00], 8),        // ADD A, d8
        (&[0xC7], 16),             // RST 00H
        (&[0xE9], 4),              // JP HL
        (&[0xEA, 0x00, 0xC0], 16), // LD (a16), A
        (&[0xF3], 4),              // DI
        (&[0xFB], 4),              // EI
    ];
    for (program, expected) in golden {
        let (mut cpu, mut bus, irq) = setup(program);
        cpu.regs.set_hl(0xC000);
        assert_eq!(
            step(&mut cpu, &mut bus, &irq),
            *expected,
            "program {:02X?}",
            program
        );
    }
}
