//! Fraud rule trait - the interface every check implements

use serde::{Deserialize, Serialize};

use crate::error::FraudResult;
use crate::transaction::Transaction;

/// Outcome of one rule for one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleResult {
    /// The rule found nothing suspicious
    pub fn pass(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            passed: true,
            message: None,
        }
    }

    /// The rule flagged the transaction
    pub fn fail(rule_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            passed: false,
            message: Some(message.into()),
        }
    }
}

/// A single fraud check.
///
/// Rules are shared across threads by the engine, so any state they keep
/// must be internally synchronized.
pub trait FraudRule: Send + Sync {
    /// Rule name, reported in every [`RuleResult`]
    fn name(&self) -> &str;

    /// Check one transaction.
    ///
    /// Return `Ok` with a pass or fail result. Return `Err` when the rule
    /// could not run at all; the engine records that as a failure.
    fn check(&self, tx: &Transaction) -> FraudResult<RuleResult>;
}
