// Configuration management
//
// Handles emulator configuration and settings persistence. Trimmed to the
// settings this core actually has: no video/audio/hotkey config, since
// rendering and audio output are not part of this crate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const CONFIG_FILE: &str = "emulator_config.toml";

/// How much detail `Emulator::step` logs per instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceVerbosity {
    /// No trace output.
    Silent,
    /// One line per instruction, per spec.md §4.6's column format.
    Instruction,
}

/// User-configurable settings for the emulator core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// How much trace output `Emulator::step` produces.
    pub trace_verbosity: TraceVerbosity,

    /// Where trace lines go when `trace_verbosity != Silent`. `None` means
    /// stdout.
    pub trace_output_path: Option<String>,

    /// Upper bound `run_until` will not exceed even if the caller asks for
    /// more, as a safety net against runaway programs during development.
    pub instruction_budget: u64,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            trace_verbosity: TraceVerbosity::Silent,
            trace_output_path: None,
            instruction_budget: 10_000_000,
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file, or create and persist a default one.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_a_silent_trace_and_a_ten_million_instruction_budget() {
        let config = EmulatorConfig::default();
        assert_eq!(config.trace_verbosity, TraceVerbosity::Silent);
        assert_eq!(config.instruction_budget, 10_000_000);
        assert!(config.trace_output_path.is_none());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = EmulatorConfig {
            trace_verbosity: TraceVerbosity::Instruction,
            trace_output_path: Some("trace.log".to_string()),
            instruction_budget: 42,
        };
        let toml_str = toml::to_string(&config).expect("serialize");
        let deserialized: EmulatorConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(deserialized.trace_verbosity, config.trace_verbosity);
        assert_eq!(deserialized.instruction_budget, config.instruction_budget);
    }
}
