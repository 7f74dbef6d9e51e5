// Execution loop - fetch, resolve, dispatch
//
// `step` is the interpreter's only public entry point for running code: it
// fetches one opcode, resolves its addressing mode, dispatches to the
// instruction handler, and accounts cycles. No interrupts exist in this
// core, so `step` never does anything but what the opcode stream says.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// Run one instruction, returning the number of cycles it consumed.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        let opcode = self.bus.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        let info = &OPCODE_TABLE[opcode as usize];
        let mode = info.mode;
        let addr = self.resolve_address(mode)?;

        let branch_cycles = self.dispatch(opcode, &addr)?;

        let mut cycles = info.cycles;
        if info.page_cycle && addr.page_crossed {
            cycles += 1;
        }
        cycles += branch_cycles;
        self.cycle_count = self.cycle_count.wrapping_add(cycles as u64);
        Ok(cycles)
    }

    /// Dispatch `opcode` to its handler. Returns the extra cycles a taken
    /// branch contributes (0 for every other instruction).
    fn dispatch(&mut self, opcode: u8, addr: &AddressingResult) -> Result<u8, CpuError> {
        match opcode {
            // Load/store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.op_lda(addr)?,
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.op_ldx(addr)?,
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.op_ldy(addr)?,
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.op_sta(addr)?,
            0x86 | 0x96 | 0x8E => self.op_stx(addr)?,
            0x84 | 0x94 | 0x8C => self.op_sty(addr)?,

            // Transfers
            0xAA => self.op_tax(),
            0xA8 => self.op_tay(),
            0x8A => self.op_txa(),
            0x98 => self.op_tya(),
            0xBA => self.op_tsx(),
            0x9A => self.op_txs(),

            // Stack
            0x48 => self.op_pha()?,
            0x08 => self.op_php()?,
            0x68 => self.op_pla()?,
            0x28 => self.op_plp()?,

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.op_adc(addr)?,
            0xE9 | 0xEB | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.op_sbc(addr)?,
            0xE6 | 0xF6 | 0xEE | 0xFE => self.op_inc(addr)?,
            0xE8 => self.op_inx(),
            0xC8 => self.op_iny(),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.op_dec(addr)?,
            0xCA => self.op_dex(),
            0x88 => self.op_dey(),

            // Logical
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.op_and(addr)?,
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.op_ora(addr)?,
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.op_eor(addr)?,
            0x24 | 0x2C => self.op_bit(addr)?,

            // Shifts/rotates
            0x0A => self.op_asl(addr, true)?,
            0x06 | 0x16 | 0x0E | 0x1E => self.op_asl(addr, false)?,
            0x4A => self.op_lsr(addr, true)?,
            0x46 | 0x56 | 0x4E | 0x5E => self.op_lsr(addr, false)?,
            0x2A => self.op_rol(addr, true)?,
            0x26 | 0x36 | 0x2E | 0x3E => self.op_rol(addr, false)?,
            0x6A => self.op_ror(addr, true)?,
            0x66 | 0x76 | 0x6E | 0x7E => self.op_ror(addr, false)?,

            // Compare
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.op_cmp(addr)?,
            0xE0 | 0xE4 | 0xEC => self.op_cpx(addr)?,
            0xC0 | 0xC4 | 0xCC => self.op_cpy(addr)?,

            // Branches
            0x90 => return Ok(self.op_branch(addr, !self.get_flag(flag::CARRY))),
            0xB0 => return Ok(self.op_branch(addr, self.get_flag(flag::CARRY))),
            0xF0 => return Ok(self.op_branch(addr, self.get_flag(flag::ZERO))),
            0x30 => return Ok(self.op_branch(addr, self.get_flag(flag::NEGATIVE))),
            0xD0 => return Ok(self.op_branch(addr, !self.get_flag(flag::ZERO))),
            0x10 => return Ok(self.op_branch(addr, !self.get_flag(flag::NEGATIVE))),
            0x50 => return Ok(self.op_branch(addr, !self.get_flag(flag::OVERFLOW))),
            0x70 => return Ok(self.op_branch(addr, self.get_flag(flag::OVERFLOW))),

            // Jumps/subroutines
            0x4C | 0x6C => self.op_jmp(addr),
            0x20 => self.op_jsr(addr)?,
            0x60 => self.op_rts()?,
            0x40 => self.op_rti()?,
            0x00 => self.op_brk()?,

            // Flags
            0x18 => self.clear_flag(flag::CARRY),
            0x38 => self.set_flag(flag::CARRY),
            0x58 => self.clear_flag(flag::INTERRUPT_DISABLE),
            0x78 => self.set_flag(flag::INTERRUPT_DISABLE),
            0xB8 => self.clear_flag(flag::OVERFLOW),
            0xD8 => self.clear_flag(flag::DECIMAL),
            0xF8 => self.set_flag(flag::DECIMAL),

            0xEA | 0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA | 0x80 | 0x82 | 0x89 | 0xC2 | 0xE2
            | 0x04 | 0x44 | 0x64 | 0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 | 0x0C | 0x1C | 0x3C
            | 0x5C | 0x7C | 0xDC | 0xFC => {}

            // Illegal opcodes
            0x0B | 0x2B => self.op_anc(addr)?,
            0x4B => self.op_alr(addr)?,
            0x6B => self.op_arr(addr)?,
            0xCB => self.op_sbx(addr)?,
            0x07 | 0x17 | 0x0F | 0x1F | 0x1B | 0x03 | 0x13 => self.op_slo(addr)?,
            0x47 | 0x57 | 0x4F | 0x5F | 0x5B | 0x43 | 0x53 => self.op_sre(addr)?,
            0x27 | 0x37 | 0x2F | 0x3F | 0x3B | 0x23 | 0x33 => self.op_rla(addr)?,
            0x67 | 0x77 | 0x6F | 0x7F | 0x7B | 0x63 | 0x73 => self.op_rra(addr)?,
            0xC7 | 0xD7 | 0xCF | 0xDF | 0xDB | 0xC3 | 0xD3 => self.op_dcp(addr)?,
            0xE7 | 0xF7 | 0xEF | 0xFF | 0xFB | 0xE3 | 0xF3 => self.op_isc(addr)?,
            0xA7 | 0xB7 | 0xAF | 0xBF | 0xA3 | 0xB3 => self.op_lax(addr)?,
            0x87 | 0x97 | 0x8F | 0x83 => self.op_sax(addr)?,

            _ => return Err(CpuError::UnknownOpcode(opcode)),
        }
        Ok(0)
    }
}

use crate::cpu::flags as flag;
