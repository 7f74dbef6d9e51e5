// Comparison instructions for 6502 CPU
// Perform subtraction without storing the result, only updating flags.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu, CpuError};

impl Cpu {
    /// Shared comparison: `register - value`, setting C (no borrow), Z, N.
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.update_flag(flags::CARRY, register >= value);
        self.update_zero_and_negative(result);
    }

    /// CMP - Compare Accumulator. Flags affected: C, Z, N.
    pub fn op_cmp(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.compare(self.a, value);
        Ok(())
    }

    /// CPX - Compare X Register. Flags affected: C, Z, N.
    pub fn op_cpx(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.compare(self.x, value);
        Ok(())
    }

    /// CPY - Compare Y Register. Flags affected: C, Z, N.
    pub fn op_cpy(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.compare(self.y, value);
        Ok(())
    }
}
