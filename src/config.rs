use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tuning of the BBP series evaluation. The defaults reproduce the
/// classic behaviour digit for digit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BbpParams {
    /// Cap on the lower-range index, threshold above which exponents are
    /// reduced modulo `m - 1`, and the largest position that still gets a tail.
    pub direct_limit: i64,

    /// Tail terms below this magnitude are dropped.
    pub tail_tolerance: f64,

    /// Hard cap on the number of tail iterations.
    pub tail_max_terms: i64,
}

impl Default for BbpParams {
    fn default() -> Self {
        Self {
            direct_limit: 1_000_000,
            tail_tolerance: 1e-15,
            tail_max_terms: 100,
        }
    }
}

/// Top-level configuration, usually read from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bbp: BbpParams,

    /// Number of digits printed per request
    pub digits: usize,

    /// Positions above this ask for confirmation first
    pub confirm_above: i64,

    /// Spread positions over the rayon pool
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bbp: BbpParams::default(),
            digits: 64,
            confirm_above: 1_000_000_000_000,
            parallel: false,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bbp.direct_limit < 0 {
            return Err(Error::Config(format!(
                "bbp.direct_limit must be non-negative, got {}",
                self.bbp.direct_limit
            )));
        }
        if !self.bbp.tail_tolerance.is_finite() || self.bbp.tail_tolerance <= 0.0 {
            return Err(Error::Config(format!(
                "bbp.tail_tolerance must be a positive number, got {}",
                self.bbp.tail_tolerance
            )));
        }
        if self.bbp.tail_max_terms < 0 {
            return Err(Error::Config(format!(
                "bbp.tail_max_terms must be non-negative, got {}",
                self.bbp.tail_max_terms
            )));
        }
        if self.digits == 0 {
            return Err(Error::Config("digits must be at least 1".to_string()));
        }
        Ok(())
    }
}
