// Jump and subroutine instructions for 6502 CPU

use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, vectors, Cpu, CpuError};

impl Cpu {
    /// JMP - Jump. The indirect page-wrap bug lives in `addr_indirect`;
    /// by the time this runs, `addr.address` is already the real target.
    pub fn op_jmp(&mut self, addr: &AddressingResult) {
        self.pc = addr.address;
    }

    /// JSR - Jump to Subroutine. Pushes `pc - 1` (the address of the JSR
    /// instruction's last byte, not the next instruction), high byte first.
    pub fn op_jsr(&mut self, addr: &AddressingResult) -> Result<(), CpuError> {
        let return_addr = self.pc.wrapping_sub(1);
        self.push_word(return_addr)?;
        self.pc = addr.address;
        Ok(())
    }

    /// RTS - Return from Subroutine. Pulls the address JSR pushed and adds
    /// one back, since JSR pushed `pc - 1`.
    pub fn op_rts(&mut self) -> Result<(), CpuError> {
        let return_addr = self.pop_word()?;
        self.pc = return_addr.wrapping_add(1);
        Ok(())
    }

    /// RTI - Return from Interrupt. Pulls status (forcing the unused bit
    /// set and the B flag cleared, as PLP does) then the exact `pc` that
    /// was pushed - no `+1`, since that offset is a JSR/RTS convention,
    /// not something BRK applies.
    pub fn op_rti(&mut self) -> Result<(), CpuError> {
        let status = self.pop_byte()?;
        self.status = (status | flags::UNUSED) & !flags::BREAK;
        self.pc = self.pop_word()?;
        Ok(())
    }

    /// BRK - Force Break. Pushes `pc + 1` (the addressing stage already
    /// advanced past the opcode byte, so this lands on `pc + 2` from the
    /// opcode's own address, skipping BRK's padding byte), then status with
    /// B and the unused bit set, sets the interrupt-disable flag, and loads
    /// `pc` from the IRQ/BRK vector.
    pub fn op_brk(&mut self) -> Result<(), CpuError> {
        self.push_word(self.pc.wrapping_add(1))?;
        self.push_byte(self.status | flags::BREAK | flags::UNUSED)?;
        self.set_flag(flags::INTERRUPT_DISABLE);
        self.pc = self.bus.read_word(vectors::IRQ_BRK)?;
        Ok(())
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

    #[test]
    fn jsr_pushes_pc_minus_one_high_byte_first() {
        let mut cpu = test_cpu();
        cpu.pc = 0x8003;
        cpu.op_jsr(&AddressingResult {
            address: 0x9000,
            page_crossed: false,
            value: None,
        })
        .unwrap();
        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cpu.pop_word().unwrap(), 0x8002);
    }

    #[test]
    fn rti_clears_break_flag_from_the_pushed_status() {
        // BRK always pushes status with B set; RTI popping that same byte
        // back must not leave B set in the live status register.
        let mut cpu = test_cpu();
        cpu.push_word(0x8040).unwrap();
        cpu.push_byte(flags::BREAK | flags::UNUSED | flags::CARRY)
            .unwrap();
        cpu.op_rti().unwrap();
        assert_eq!(cpu.pc, 0x8040);
        assert!(!cpu.get_flag(flags::BREAK));
        assert!(cpu.get_flag(flags::UNUSED));
        assert!(cpu.get_flag(flags::CARRY));
    }

    #[test]
    fn brk_sets_interrupt_disable_and_loads_irq_vector() {
        // $FFFE-$FFFF sit at offset $3FFE-$3FFF of a single PRG bank
        // ($C000 + $3FFE = $FFFE); ROM can't be written after construction.
        let mut prg = [0u8; 16384];
        prg[0x3FFE] = 0x00;
        prg[0x3FFF] = 0x90;
        let cartridge = Cartridge {
            prg_rom_banks: vec![prg],
            chr_rom_banks: vec![[0; 8192]],
            prg_ram_banks_count: 1,
            mapper_id: 0,
            mirroring_mode: Mirroring::Horizontal,
            battery_backed_ram: false,
            trainer_present: false,
        };
        let mut cpu = Cpu::new(MemoryBus::new(cartridge).unwrap());
        cpu.pc = 0x8001;
        cpu.status = 0;
        cpu.op_brk().unwrap();
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.get_flag(flags::INTERRUPT_DISABLE));
        let pushed_status = cpu.pop_byte().unwrap();
        assert_eq!(pushed_status, flags::BREAK | flags::UNUSED);
        assert_eq!(cpu.pop_word().unwrap(), 0x8002);
    }
}
