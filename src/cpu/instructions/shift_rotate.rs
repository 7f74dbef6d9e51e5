// Shift and rotate instructions for 6502 CPU

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu, CpuError};

impl Cpu {
    fn read_shiftable(&self, addr: &AddressingResult, accumulator: bool) -> Result<u8, CpuError> {
        if accumulator {
            Ok(self.a)
        } else {
            Ok(self.bus.read_byte(addr.address)?)
        }
    }

    fn write_shiftable(
        &mut self,
        addr: &AddressingResult,
        accumulator: bool,
        value: u8,
    ) -> Result<(), CpuError> {
        if accumulator {
            self.a = value;
        } else {
            self.bus.write_byte(addr.address, value)?;
        }
        Ok(())
    }

    /// ASL - Arithmetic Shift Left. `C <- [76543210] <- 0`. Flags affected: C, Z, N.
    pub fn op_asl(&mut self, addr: &AddressingResult, accumulator: bool) -> Result<(), CpuError> {
        let value = self.read_shiftable(addr, accumulator)?;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.update_zero_and_negative(result);
        self.write_shiftable(addr, accumulator, result)
    }

    /// LSR - Logical Shift Right. `0 -> [76543210] -> C`. Flags affected: C, Z, N.
    /// N is always clear since bit 7 is always filled with 0.
    pub fn op_lsr(&mut self, addr: &AddressingResult, accumulator: bool) -> Result<(), CpuError> {
        let value = self.read_shiftable(addr, accumulator)?;
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.update_zero_and_negative(result);
        self.write_shiftable(addr, accumulator, result)
    }

    /// ROL - Rotate Left through Carry. `C <- [76543210] <- C`. Flags affected: C, Z, N.
    pub fn op_rol(&mut self, addr: &AddressingResult, accumulator: bool) -> Result<(), CpuError> {
        let value = self.read_shiftable(addr, accumulator)?;
        let old_carry = self.get_flag(flags::CARRY) as u8;
        self.update_flag(flags::CARRY, value & 0x80 != 0);
        let result = (value << 1) | old_carry;
        self.update_zero_and_negative(result);
        self.write_shiftable(addr, accumulator, result)
    }

    /// ROR - Rotate Right through Carry. `C -> [76543210] -> C`. Flags affected: C, Z, N.
    pub fn op_ror(&mut self, addr: &AddressingResult, accumulator: bool) -> Result<(), CpuError> {
        let value = self.read_shiftable(addr, accumulator)?;
        let old_carry = if self.get_flag(flags::CARRY) { 0x80 } else { 0 };
        self.update_flag(flags::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | old_carry;
        self.update_zero_and_negative(result);
        self.write_shiftable(addr, accumulator, result)
    }
}
