// Logic and bit operation instructions for 6502 CPU

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu, CpuError};

impl Cpu {
    /// AND - Logical AND. `A = A & M`. Flags affected: Z, N.
    pub fn op_and(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.a &= value;
        self.update_zero_and_negative(self.a);
        Ok(())
    }

    /// ORA - Logical OR. `A = A | M`. Flags affected: Z, N.
    pub fn op_ora(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.a |= value;
        self.update_zero_and_negative(self.a);
        Ok(())
    }

    /// EOR - Exclusive OR. `A = A ^ M`. Flags affected: Z, N.
    pub fn op_eor(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.a ^= value;
        self.update_zero_and_negative(self.a);
        Ok(())
    }

    /// BIT - Bit Test. Does not store `A & M`; copies bits 6 and 7 of the
    /// memory operand straight into V and N, independent of the AND result.
    ///
    /// Flags affected: Z (of `A & M`), V (bit 6 of M), N (bit 7 of M).
    pub fn op_bit(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        self.update_flag(flags::ZERO, self.a & value == 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
        Ok(())
    }
}
