// Stack operation instructions for 6502 CPU

use crate::cpu::flags;
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// PHA - Push Accumulator. Flags affected: none.
    pub fn op_pha(&mut self) -> Result<(), CpuError> {
        self.push_byte(self.a)
    }

    /// PLA - Pull Accumulator. Flags affected: Z, N.
    pub fn op_pla(&mut self) -> Result<(), CpuError> {
        self.a = self.pop_byte()?;
        self.update_zero_and_negative(self.a);
        Ok(())
    }

    /// PHP - Push Processor Status. The byte pushed always has the B flag
    /// and the unused bit set, regardless of the CPU's own status register.
    pub fn op_php(&mut self) -> Result<(), CpuError> {
        self.push_byte(self.status | flags::BREAK | flags::UNUSED)
    }

    /// PLP - Pull Processor Status. The unused bit is forced set and the B
    /// flag is forced clear, regardless of what was on the stack.
    pub fn op_plp(&mut self) -> Result<(), CpuError> {
        let pulled = self.pop_byte()?;
        self.status = (pulled | flags::UNUSED) & !flags::BREAK;
        Ok(())
    }
}
