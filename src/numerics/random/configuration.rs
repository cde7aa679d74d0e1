// src/numerics/random/configuration.rs
use tracing::trace;

use crate::error::{NumericsError, Result};

/// Default PCG32 state seed.
pub const DEFAULT_SEED: u64 = 12047754176567800795;
/// Default PCG32 stream selector.
pub const DEFAULT_INC: u64 = 1442695040888963407;

/// Configuration for a PCG32 generator.
///
/// `seed` is the initial state and `increment` selects one of the 2^63
/// independent streams; only its low 63 bits matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomConfig {
    /// Initial generator state.
    pub seed: u64,

    /// Stream selector, shifted left and forced odd when applied.
    pub increment: u64,
}

impl Default for RandomConfig {
    /// The engine-wide default stream.
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            increment: DEFAULT_INC,
        }
    }
}

impl RandomConfig {
    pub fn new(seed: u64, increment: u64) -> Self {
        Self { seed, increment }
    }

    /// Default stream, custom seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Parses a parameter string such as `"seed=42,increment=0x2f"`.
    ///
    /// Keys are `seed` and `increment` (or `inc`); values are decimal or
    /// `0x`-prefixed hexadecimal. Omitted keys keep their defaults.
    pub fn parse(parameters: &str) -> Result<Self> {
        let mut config = Self::default();

        for entry in parameters.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => {
                    return Err(NumericsError::InvalidParameter {
                        name: entry.to_string(),
                        value: String::new(),
                        reason: "expected key=value".to_string(),
                    })
                }
            };

            match key {
                "seed" => config.seed = parse_u64(key, value)?,
                "increment" | "inc" => config.increment = parse_u64(key, value)?,
                _ => return Err(NumericsError::UnknownParameter(key.to_string())),
            }
        }

        trace!(seed = config.seed, increment = config.increment, "parsed random config");
        Ok(config)
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };

    parsed.map_err(|e| NumericsError::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
