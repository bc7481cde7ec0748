use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Default acceptance threshold shared by both matchers.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Matcher configuration.
///
/// The threshold is policy, not algorithm: a candidate is accepted only when
/// its similarity is strictly greater than `threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum similarity for a keyword match to be accepted.
    pub threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Parse from a TOML document, validating ranges.
    pub fn from_toml_str(s: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| EngineError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a usable similarity bound.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(EngineError::InvalidConfig {
                reason: format!("threshold must be in [0.0, 1.0], got {}", self.threshold),
            });
        }
        Ok(())
    }
}
