use super::Cpu;
use crate::memory_bus::MemoryBus;

// Operand encoding shared by every CB row: B C D E H L (HL) A
const OPERAND_HLP: u8 = 6;

// --- 0xCB-prefixed bit/rotate/shift instructions ---
//
// The CB map is regular enough to decode arithmetically: bits 0-2 select
// the operand, bits 3-7 select the operation. Register forms cost 8
// cycles, (HL) forms 16 (12 for BIT, which never writes back).
impl Cpu {
    /// Executes one CB-prefixed instruction and returns its total cycle
    /// cost, prefix byte included. Every CB opcode is defined.
    pub(super) fn execute_cb(&mut self, opcode: u8, bus: &mut MemoryBus) -> u16 {
        let operand = opcode & 0x07;
        let bit = (opcode >> 3) & 0x07;

        match opcode {
            // Rotates and shifts
            0x00..=0x3F => {
                let value = self.read_operand(operand, bus);
                let result = match opcode >> 3 {
                    0 => self.rlc(value),
                    1 => self.rrc(value),
                    2 => self.rl(value),
                    3 => self.rr(value),
                    4 => self.sla(value),
                    5 => self.sra(value),
                    6 => self.swap(value),
                    _ => self.srl(value),
                };
                self.write_operand(operand, result, bus);
                if operand == OPERAND_HLP { 16 } else { 8 }
            }
            // BIT n, r
            0x40..=0x7F => {
                let value = self.read_operand(operand, bus);
                self.test_bit(bit, value);
                if operand == OPERAND_HLP { 12 } else { 8 }
            }
            // RES n, r
            0x80..=0xBF => {
                let value = self.read_operand(operand, bus) & !(1 << bit);
                self.write_operand(operand, value, bus);
                if operand == OPERAND_HLP { 16 } else { 8 }
            }
            // SET n, r
            0xC0..=0xFF => {
                let value = self.read_operand(operand, bus) | (1 << bit);
                self.write_operand(operand, value, bus);
                if operand == OPERAND_HLP { 16 } else { 8 }
            }
        }
    }

    fn read_operand(&self, operand: u8, bus: &MemoryBus) -> u8 {
        match operand {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            OPERAND_HLP => bus.read_byte(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    fn write_operand(&mut self, operand: u8, value: u8, bus: &mut MemoryBus) {
        match operand {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            OPERAND_HLP => bus.write_byte(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }
}
