//! Driver configuration.

use sheq_ir::Arena;

/// Environment variable overriding the arena capacity, in bytes.
pub const ARENA_BYTES_VAR: &str = "SHEQ_ARENA_BYTES";

/// Settings for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Size of the region every lexing, parsing and evaluation allocation
    /// is charged to.
    pub arena_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            arena_capacity: Arena::DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Defaults, overridden by `SHEQ_ARENA_BYTES` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ARENA_BYTES_VAR) {
            Ok(value) => Self::default().with_arena_bytes(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(value)) => Err(ConfigError::InvalidArenaBytes {
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Parse a capacity override. Zero is rejected: nothing fits in it.
    pub fn with_arena_bytes(self, value: &str) -> Result<Self, ConfigError> {
        match value.trim().parse::<usize>() {
            Ok(bytes) if bytes > 0 => Ok(Config {
                arena_capacity: bytes,
            }),
            _ => Err(ConfigError::InvalidArenaBytes {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SHEQ_ARENA_BYTES must be a positive byte count, got '{value}'")]
    InvalidArenaBytes { value: String },
}
