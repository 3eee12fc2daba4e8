//! Nearest-rank percentile selection
//!
//! Selects an actual element of a sorted sequence at a computed integer
//! rank; no interpolation between ranks.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use types::errors::ConfigError;

/// A validated percentile parameter in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentile(u8);

impl Percentile {
    /// Validate an integer percentile value
    pub fn try_new(value: i64) -> Result<Self, ConfigError> {
        if !(0..=100).contains(&value) {
            return Err(ConfigError::PercentileOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Read the percentile parameter from its side file
    ///
    /// The file holds a single integer, optionally surrounded by whitespace.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|_| ConfigError::PercentileUnreadable {
            path: path.display().to_string(),
        })?;
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ConfigError::PercentileNotAnInteger {
                raw: trimmed.to_string(),
            })?;
        Self::try_new(value)
    }

    /// The percentile value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based rank of the pth percentile in a sorted sequence of length n
///
/// Nearest-rank definition: `ceil(p * n / 100) - 1`, floored at rank zero so
/// the result is always a valid index for `n >= 1`. Callers only invoke this
/// once at least one amount has been recorded.
pub fn nearest_rank_index(n: u64, p: Percentile) -> usize {
    debug_assert!(n >= 1, "rank lookup on an empty sequence");
    let ordinal_rank = (u64::from(p.value()) * n + 99) / 100;
    ordinal_rank.saturating_sub(1) as usize
}
