// Mapper 0 (NROM) - the simplest NES mapper, with no bank switching
//
// NROM routes $8000-$BFFF to a fixed "lower" PRG-ROM bank and $C000-$FFFF to
// a fixed "upper" bank, chosen once at load time: on a single-bank cartridge
// both banks are bank 0, which is what produces the well-known mirroring of
// a 16KB NROM-128 image across the full $8000-$FFFF window.

use crate::bus::{BusError, Region};
use crate::cartridge::Cartridge;
use crate::cartridge::mappers::Mapper;

/// Mapper 0 - stateless bank routing, no registers.
#[derive(Debug)]
pub struct Nrom;

impl Mapper for Nrom {
    fn initial_lower_bank(&self, _cartridge: &Cartridge) -> u16 {
        0
    }

    fn initial_upper_bank(&self, cartridge: &Cartridge) -> u16 {
        (cartridge.prg_rom_banks.len() - 1) as u16
    }

    fn read_byte(
        &self,
        cartridge: &Cartridge,
        lower_bank: u16,
        upper_bank: u16,
        addr: u16,
    ) -> Result<u8, BusError> {
        match addr {
            0x8000..=0xBFFF => {
                let bank = &cartridge.prg_rom_banks[lower_bank as usize];
                Ok(bank[(addr - 0x8000) as usize])
            }
            0xC000..=0xFFFF => {
                let bank = &cartridge.prg_rom_banks[upper_bank as usize];
                Ok(bank[(addr - 0xC000) as usize])
            }
            // NROM has no PRG-RAM registers of its own; $6000-$7FFF reads as
            // open bus rather than a fatal trap, since the bus contract only
            // names $8000-$FFFF as mapper-owned cartridge space.
            0x6000..=0x7FFF => Ok(0),
            _ => Err(BusError::UnsupportedRead(Region::IoExpansion)),
        }
    }

    fn write_byte(
        &mut self,
        _cartridge: &Cartridge,
        _lower_bank: &mut u16,
        _upper_bank: &mut u16,
        _addr: u16,
        _value: u8,
    ) {
        // NROM has no bank-switch registers; cartridge-space writes are no-ops.
    }
}
