// Shared helpers for ROM-based integration tests.
//
// Test ROMs in the Blargg/nestest style write a status byte to $6000 and
// an ASCII message starting at $6004: 0x80 means still running, 0x81
// means reset requested, anything else is the final result code (0x00
// is pass).

#![allow(dead_code)]

use nes_rs::{Cartridge, Emulator, EmulatorConfig};
use std::fs;
use std::path::Path;

pub const MAX_TEST_CYCLES: u64 = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(u8),
    Timeout,
}

pub fn load_rom_bytes(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("failed to load ROM from {}: {}", path.display(), e))
}

/// Run a status-byte-protocol test ROM for up to `max_cycles` and report
/// the outcome read back from $6000/$6004.
pub fn run_status_byte_test_rom(rom_path: &str, max_cycles: u64) -> Result<(bool, String), String> {
    let bytes = load_rom_bytes(Path::new(rom_path))?;
    let mut config = EmulatorConfig::load_or_default();
    config.instruction_budget = max_cycles;
    let mut emulator = Emulator::load_with_config(&bytes, config)
        .map_err(|e| format!("failed to load {}: {}", rom_path, e))?;

    let mut cycles_run = 0u64;
    loop {
        emulator
            .step()
            .map_err(|e| format!("execution error: {}", e))?;
        cycles_run += 1;
        if cycles_run >= max_cycles {
            return Ok((false, "timed out waiting for test completion".to_string()));
        }

        let status = emulator.cpu().bus.read_byte(0x6000).unwrap_or(0);
        if status == 0x80 || status == 0x81 {
            continue;
        }
        if status == 0x00 {
            return Ok((true, "test reported success".to_string()));
        }
        let message = read_result_string(&emulator);
        return Ok((false, format!("status ${:02X}: {}", status, message)));
    }
}

fn read_result_string(emulator: &Emulator) -> String {
    let mut result = String::new();
    let mut addr = 0x6004u16;
    for _ in 0..255 {
        let byte = emulator.cpu().bus.read_byte(addr).unwrap_or(0);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            result.push(byte as char);
        }
        addr = addr.wrapping_add(1);
    }
    result
}

/// Build an iNES byte vector wrapping a single NROM-128 PRG-ROM bank with
/// the RESET vector pointed at `$8000`.
pub fn nrom_image(prg: &[u8; 16384]) -> Vec<u8> {
    let mut data = vec![0u8; 16 + 16384 + 8192];
    data[0..4].copy_from_slice(b"NES\x1A");
    data[4] = 1;
    data[5] = 1;
    data[16..16 + 16384].copy_from_slice(prg);
    data
}

pub fn cartridge_from_ines(bytes: &[u8]) -> Cartridge {
    Cartridge::from_ines_bytes(bytes).expect("valid iNES image")
}
