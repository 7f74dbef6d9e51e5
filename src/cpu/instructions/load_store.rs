// Load and store instructions for 6502 CPU

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// LDA - Load Accumulator. Flags affected: Z, N.
    pub fn op_lda(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.a = value;
        self.update_zero_and_negative(value);
        Ok(())
    }

    /// LDX - Load X Register. Flags affected: Z, N.
    pub fn op_ldx(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.x = value;
        self.update_zero_and_negative(value);
        Ok(())
    }

    /// LDY - Load Y Register. Flags affected: Z, N.
    pub fn op_ldy(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.y = value;
        self.update_zero_and_negative(value);
        Ok(())
    }

    /// STA - Store Accumulator. Flags affected: none.
    pub fn op_sta(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        self.bus.write_byte(addr.address, self.a)?;
        Ok(())
    }

    /// STX - Store X Register. Flags affected: none.
    pub fn op_stx(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        self.bus.write_byte(addr.address, self.x)?;
        Ok(())
    }

    /// STY - Store Y Register. Flags affected: none.
    pub fn op_sty(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        self.bus.write_byte(addr.address, self.y)?;
        Ok(())
    }
}
