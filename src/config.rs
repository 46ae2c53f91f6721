// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sieve configuration.
//!
//! ```json
//! { "seed": 2, "limit": 65537 }
//! ```
//!
//! Both fields are optional. The limit is fixed for the life of a wheel,
//! so size it for the largest `n` that will ever be asked about.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;
use crate::sieve::wheel::DEFAULT_LIMIT;
use crate::sieve::wheel::DEFAULT_SEED;
use crate::sieve::wheel::Wheel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Bootstrap wheel to start from: 0, 1 or 2.
    pub seed: u32,
    /// Bound past which the wheel stops growing.
    pub limit: u32,
}

impl Default for SieveConfig {
    fn default() -> Self {
        return SieveConfig {
            seed: DEFAULT_SEED,
            limit: DEFAULT_LIMIT,
        };
    }
}

impl SieveConfig {
    pub fn with_seed(mut self, seed: u32) -> SieveConfig {
        self.seed = seed;
        return self;
    }

    pub fn with_limit(mut self, limit: u32) -> SieveConfig {
        self.limit = limit;
        return self;
    }

    pub fn from_json_str(json: &str) -> Result<SieveConfig> {
        return Ok(serde_json::from_str(json)?);
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<SieveConfig> {
        let json = std::fs::read_to_string(path)?;
        return SieveConfig::from_json_str(&json);
    }

    /// Build the seed wheel, rejecting seeds without a closed form.
    pub fn build_wheel(&self) -> Result<Wheel> {
        return Wheel::new(self.seed, self.limit);
    }
}
