// Arithmetic instructions for 6502 CPU

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu, CpuError};

impl Cpu {
    /// ADC - Add with Carry. `A = A + M + C`.
    ///
    /// Overflow is set when both operands share a sign and the result's
    /// sign differs from theirs: `(A^M) & 0x80 == 0 && (A^result) & 0x80 != 0`.
    ///
    /// Flags affected: C, Z, V, N.
    pub fn op_adc(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        let carry_in = self.get_flag(flags::CARRY) as u16;
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        let overflow = (self.a ^ value) & 0x80 == 0 && (self.a ^ result) & 0x80 != 0;
        self.update_flag(flags::CARRY, sum > 0xFF);
        self.update_flag(flags::OVERFLOW, overflow);
        self.a = result;
        self.update_zero_and_negative(result);
        Ok(())
    }

    /// SBC - Subtract with Carry. `A = A - M - (1-C)`, implemented as
    /// `A + !M + C` so the same carry/overflow rule as ADC applies.
    ///
    /// Flags affected: C, Z, V, N.
    pub fn op_sbc(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.read_operand(addr)?;
        let inverted = !value;
        let carry_in = self.get_flag(flags::CARRY) as u16;
        let sum = self.a as u16 + inverted as u16 + carry_in;
        let result = sum as u8;

        let overflow = (self.a ^ inverted) & 0x80 == 0 && (self.a ^ result) & 0x80 != 0;
        self.update_flag(flags::CARRY, sum > 0xFF);
        self.update_flag(flags::OVERFLOW, overflow);
        self.a = result;
        self.update_zero_and_negative(result);
        Ok(())
    }

    /// INC - Increment Memory. Flags affected: Z, N.
    pub fn op_inc(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.bus.read_byte(addr.address)?.wrapping_add(1);
        self.bus.write_byte(addr.address, value)?;
        self.update_zero_and_negative(value);
        Ok(())
    }

    /// INX - Increment X Register. Flags affected: Z, N.
    pub fn op_inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative(self.x);
    }

    /// INY - Increment Y Register. Flags affected: Z, N.
    pub fn op_iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative(self.y);
    }

    /// DEC - Decrement Memory. Flags affected: Z, N.
    pub fn op_dec(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let value = self.bus.read_byte(addr.address)?.wrapping_sub(1);
        self.bus.write_byte(addr.address, value)?;
        self.update_zero_and_negative(value);
        Ok(())
    }

    /// DEX - Decrement X Register. Flags affected: Z, N.
    pub fn op_dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative(self.x);
    }

    /// DEY - Decrement Y Register. Flags affected: Z, N.
    pub fn op_dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative(self.y);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::MemoryBus;
    use crate::cartridge::{Cartridge, Mirroring};
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::{flags, Cpu};

    fn test_cpu() -> Cpu {
        let cartridge = Cartridge {
            prg_rom_banks: vec![[0; 16384]],
            chr_rom_banks: vec![[0; 8192]],
            prg_ram_banks_count: 1,
            mapper_id: 0,
            mirroring_mode: Mirroring::Horizontal,
            battery_backed_ram: false,
            trainer_present: false,
        };
        Cpu::new(MemoryBus::new(cartridge).unwrap())
    }

    fn imm(value: u8) -> AddressingResult {
        AddressingResult {
            address: 0,
            page_crossed: false,
            value: Some(value),
        }
    }

    #[test]
    fn adc_0x50_plus_0x50_overflows_into_negative() {
        let mut cpu = test_cpu();
        cpu.a = 0x50;
        cpu.op_adc(&imm(0x50)).unwrap();
        assert_eq!(cpu.a, 0xA0);
        assert!(!cpu.get_flag(flags::CARRY));
        assert!(cpu.get_flag(flags::OVERFLOW));
        assert!(cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn sbc_with_carry_clear_borrows_one_extra() {
        let mut cpu = test_cpu();
        cpu.a = 0x00;
        cpu.clear_flag(flags::CARRY);
        cpu.op_sbc(&imm(0x01)).unwrap();
        assert_eq!(cpu.a, 0xFE);
        assert!(!cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn inx_wraps_from_0xff_to_zero() {
        let mut cpu = test_cpu();
        cpu.x = 0xFF;
        cpu.op_inx();
        assert_eq!(cpu.x, 0);
        assert!(cpu.get_flag(flags::ZERO));
    }

    #[test]
    fn dec_wraps_from_zero_to_0xff_in_memory() {
        let mut cpu = test_cpu();
        cpu.bus.write_byte(0x0010, 0x00).unwrap();
        cpu.op_dec(&AddressingResult {
            address: 0x0010,
            page_crossed: false,
            value: None,
        })
        .unwrap();
        assert_eq!(cpu.bus.read_byte(0x0010).unwrap(), 0xFF);
        assert!(cpu.get_flag(flags::NEGATIVE));
    }
}
