//! Fraud screening errors

use thiserror::Error;

/// Errors from fraud rules and configuration
#[derive(Debug, Error)]
pub enum FraudError {
    #[error("Rule {rule} failed: {message}")]
    Rule { rule: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for fraud operations
pub type FraudResult<T> = Result<T, FraudError>;

impl FraudError {
    /// Create a rule failure
    pub fn rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        FraudError::Rule {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
