//! Fraud configuration with tunable thresholds
//!
//! Every field has a default, so a partial file overrides only what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FraudError, FraudResult};

/// Thresholds for the built-in rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudConfig {
    /// Amount above which a transaction is flagged (minor units)
    #[serde(default = "default_amount_limit")]
    pub amount_limit: i64,

    /// Length of the velocity window (in seconds)
    #[serde(default = "default_velocity_window_secs")]
    pub velocity_window_secs: u64,

    /// Transactions per window allowed before flagging
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: u32,
}

fn default_amount_limit() -> i64 {
    1_000_000 // $10,000.00
}

fn default_velocity_window_secs() -> u64 {
    3600
}

fn default_velocity_threshold() -> u32 {
    5
}

impl Default for FraudConfig {
    fn default() -> Self {
        Self {
            amount_limit: default_amount_limit(),
            velocity_window_secs: default_velocity_window_secs(),
            velocity_threshold: default_velocity_threshold(),
        }
    }
}

impl FraudConfig {
    /// Load and validate from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> FraudResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FraudResult<()> {
        if self.velocity_window_secs == 0 {
            return Err(FraudError::Config(
                "velocity_window_secs must be positive".to_string(),
            ));
        }
        if self.velocity_window_secs > i64::MAX as u64 / 1000 {
            return Err(FraudError::Config(format!(
                "velocity_window_secs {} is out of range",
                self.velocity_window_secs
            )));
        }
        Ok(())
    }

    pub fn velocity_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.velocity_window_secs as i64)
    }
}
