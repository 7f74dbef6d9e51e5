// Mappers module - the cartridge-side bank-switching capability
//
// A mapper is stateless with respect to the bus (NROM has no registers at
// all) but it is the only thing that knows how the CPU's $6000-$FFFF window
// maps onto a cartridge's PRG-ROM banks. The `Mapper` trait is the plug-in
// point; `create_mapper` dispatches on the iNES mapper id parsed into
// `Cartridge::mapper_id`. Only mapper 0 (NROM) ships with this core - see
// `spec.md` Non-goals - but the trait itself is part of the stable contract.

mod mapper0;

use crate::bus::BusError;
use crate::cartridge::Cartridge;
use mapper0::Nrom;

/// Error constructing a mapper for a cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperError {
    /// The cartridge's mapper id has no implementation in this core.
    UnsupportedMapper(u8),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(id) => write!(f, "mapper {} is not supported", id),
        }
    }
}

impl std::error::Error for MapperError {}

/// The cartridge-side bank-switching contract a mapper provides to the bus.
///
/// Mappers never own the bus's RAM or the cartridge data; they are handed
/// borrows of both so that e.g. bank-switch writes can mutate the bus's bank
/// indices without the mapper holding its own copy of cartridge state.
pub trait Mapper: std::fmt::Debug {
    /// The PRG-ROM bank initially visible at `$8000-$BFFF`.
    fn initial_lower_bank(&self, cartridge: &Cartridge) -> u16;

    /// The PRG-ROM bank initially visible at `$C000-$FFFF`.
    fn initial_upper_bank(&self, cartridge: &Cartridge) -> u16;

    /// Read a byte from cartridge space (`$6000-$FFFF`).
    fn read_byte(
        &self,
        cartridge: &Cartridge,
        lower_bank: u16,
        upper_bank: u16,
        addr: u16,
    ) -> Result<u8, BusError>;

    /// Handle a write to cartridge space (`$8000-$FFFF`), which on a
    /// bank-switching mapper would retarget `lower_bank`/`upper_bank`. NROM
    /// has no registers, so its implementation is a no-op.
    fn write_byte(
        &mut self,
        cartridge: &Cartridge,
        lower_bank: &mut u16,
        upper_bank: &mut u16,
        addr: u16,
        value: u8,
    );
}

/// Construct the mapper named by a cartridge's iNES mapper id.
pub fn create_mapper(mapper_id: u8) -> Result<Box<dyn Mapper>, MapperError> {
    match mapper_id {
        0 => Ok(Box::new(Nrom)),
        other => Err(MapperError::UnsupportedMapper(other)),
    }
}
