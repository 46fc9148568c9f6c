//! Seed value object and its provenance.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Version of the seed hashing and generator algorithm.
///
/// Changing either invalidates previously recorded seeds, so bump this
/// whenever that happens.
pub const SEQUENCE_ALGORITHM_VERSION: u32 = 1;

/// A caller-visible seed: either a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// Resolves the seed to the 64-bit generator state.
    ///
    /// Numbers are used as-is. Text is hashed with SHA-256 under a
    /// version prefix and the first eight bytes are read big-endian.
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Number(value) => *value,
            Seed::Text(text) => {
                let mut hasher = Sha256::new();
                hasher.update(format!("affirmation-seed-v{}:", SEQUENCE_ALGORITHM_VERSION));
                hasher.update(text.as_bytes());
                let digest = hasher.finalize();
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&digest[..8]);
                u64::from_be_bytes(bytes)
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(value) => write!(f, "{}", value),
            Seed::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Where the seed of a specification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedOrigin {
    /// Supplied by the caller.
    Explicit,
    /// Taken from the clock because the caller gave none.
    Clock,
}

impl fmt::Display for SeedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeedOrigin::Explicit => "explicit",
            SeedOrigin::Clock => "clock",
        };
        write!(f, "{}", s)
    }
}
