// Command-line driver: loads an iNES image and runs the 6502 interpreter
// against it, optionally tracing every instruction to stdout or a file.

use nes_rs::{Emulator, EmulatorConfig, TraceVerbosity};
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("usage: nes-rs <rom.nes> [--trace] [--cycles N]");
        return ExitCode::FAILURE;
    };

    let mut config = EmulatorConfig::load_or_default();
    let mut max_cycles = u64::MAX;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--trace" => config.trace_verbosity = TraceVerbosity::Instruction,
            "--cycles" => {
                let Some(value) = args.next().and_then(|s| s.parse().ok()) else {
                    eprintln!("--cycles requires a numeric argument");
                    return ExitCode::FAILURE;
                };
                max_cycles = value;
            }
            other => {
                eprintln!("unrecognized argument: {}", other);
                return ExitCode::FAILURE;
            }
        }
    }

    let bytes = match fs::read(&rom_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {}: {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = match Emulator::load_with_config(&bytes, config) {
        Ok(emulator) => emulator,
        Err(err) => {
            eprintln!("failed to load {}: {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    match emulator.run_until(max_cycles) {
        Ok(cycles) => {
            println!("ran {} cycles", cycles);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("execution halted: {}", err);
            ExitCode::FAILURE
        }
    }
}
