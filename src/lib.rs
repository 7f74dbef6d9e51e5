// 6502 interpreter core for NES ROM images
//
// This crate is the CPU/bus/mapper triad only: an NROM cartridge loader, a
// memory bus, and a cycle-accounted 6502 interpreter. Rendering, audio,
// controller input, additional mappers, and interrupts-from-PPU/APU are
// out of scope - see `Emulator` for the thin driver these collaborators
// would sit on top of.

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod emulator;

pub use bus::{BusError, MemoryBus, Region};
pub use cartridge::mappers::{Mapper, MapperError};
pub use cartridge::{Cartridge, CartridgeError, Mirroring};
pub use cpu::{Cpu, CpuError};
pub use emulator::{Emulator, EmulatorConfig, EmulatorError, TraceVerbosity};
