// Emulator module - the library's thin top-level driver
//
// `Emulator` owns a `Cpu` (which owns its `MemoryBus`) and is the facade the
// out-of-scope binary entry point and trace-comparison harness both sit on
// top of. It carries no PPU/APU/display wiring - those remain external
// collaborators per spec.md's scope.

mod config;

pub use config::{EmulatorConfig, TraceVerbosity};

use crate::bus::MemoryBus;
use crate::cartridge::mappers::MapperError;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::{Cpu, CpuError};
use std::fs;
use std::io::Write;

/// Errors `Emulator::load`/`step` can produce, unifying the interpreter's
/// own error types into one the binary entry point can match on.
#[derive(Debug)]
pub enum EmulatorError {
    Cartridge(CartridgeError),
    Mapper(MapperError),
    Cpu(CpuError),
    Io(std::io::Error),
}

impl std::fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmulatorError::Cartridge(err) => write!(f, "{}", err),
            EmulatorError::Mapper(err) => write!(f, "{}", err),
            EmulatorError::Cpu(err) => write!(f, "{}", err),
            EmulatorError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EmulatorError {}

impl From<CartridgeError> for EmulatorError {
    fn from(err: CartridgeError) -> Self {
        EmulatorError::Cartridge(err)
    }
}

impl From<MapperError> for EmulatorError {
    fn from(err: MapperError) -> Self {
        EmulatorError::Mapper(err)
    }
}

impl From<CpuError> for EmulatorError {
    fn from(err: CpuError) -> Self {
        EmulatorError::Cpu(err)
    }
}

/// The 6502 interpreter, wrapped with configuration and trace output.
pub struct Emulator {
    cpu: Cpu,
    config: EmulatorConfig,
}

impl Emulator {
    /// Parse `bytes` as an iNES image and build an `Emulator` with `pc`
    /// already loaded from the cartridge's RESET vector.
    pub fn load(bytes: &[u8]) -> Result<Self, EmulatorError> {
        Self::load_with_config(bytes, EmulatorConfig::load_or_default())
    }

    pub fn load_with_config(
        bytes: &[u8],
        config: EmulatorConfig,
    ) -> Result<Self, EmulatorError> {
        let cartridge = Cartridge::from_ines_bytes(bytes)?;
        let bus = MemoryBus::new(cartridge)?;
        let mut cpu = Cpu::new(bus);
        cpu.reset()?;
        Ok(Emulator { cpu, config })
    }

    /// Run one instruction, emitting a trace line first if configured to.
    pub fn step(&mut self) -> Result<u8, EmulatorError> {
        if self.config.trace_verbosity == TraceVerbosity::Instruction {
            self.emit_trace()?;
        }
        Ok(self.cpu.step()?)
    }

    /// Run instructions until `max_cycles` have elapsed or an error occurs,
    /// clamped to the configured instruction budget as a runaway-loop guard.
    /// Returns the total cycles executed.
    pub fn run_until(&mut self, max_cycles: u64) -> Result<u64, EmulatorError> {
        let start = self.cpu.cycle_count;
        let mut instructions = 0u64;
        while self.cpu.cycle_count.wrapping_sub(start) < max_cycles {
            if instructions >= self.config.instruction_budget {
                break;
            }
            self.step()?;
            instructions += 1;
        }
        Ok(self.cpu.cycle_count.wrapping_sub(start))
    }

    fn emit_trace(&self) -> Result<(), EmulatorError> {
        let line = self.cpu.trace();
        match &self.config.trace_output_path {
            Some(path) => {
                let mut file = fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(EmulatorError::Io)?;
                writeln!(file, "{}", line).map_err(EmulatorError::Io)?;
            }
            None => println!("{}", line),
        }
        Ok(())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }
}
