//! Fraud Engine - runs every rule and aggregates risk

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::amount::AmountRule;
use crate::config::FraudConfig;
use crate::rule::{FraudRule, RuleResult};
use crate::transaction::Transaction;
use crate::velocity::VelocityRule;

/// Aggregated outcome of one screening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// One entry per rule, in registration order
    pub results: Vec<RuleResult>,
    /// True if any rule failed or errored
    pub is_risky: bool,
}

impl ScreeningResult {
    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

/// Ordered set of fraud rules.
///
/// Every rule runs on every transaction; a failing or erroring rule never
/// stops the ones after it.
#[derive(Default)]
pub struct FraudEngine {
    rules: Vec<Arc<dyn FraudRule>>,
}

impl FraudEngine {
    pub fn new(rules: Vec<Arc<dyn FraudRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule
    pub fn with_rule(mut self, rule: Arc<dyn FraudRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Built-in rules: amount threshold, then velocity
    pub fn from_config(config: &FraudConfig) -> Self {
        let threshold = config.velocity_threshold as usize;
        Self::new(vec![
            Arc::new(AmountRule::new(config.amount_limit)),
            Arc::new(VelocityRule::new(config.velocity_window(), threshold)),
        ])
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Screen one transaction
    pub fn check(&self, tx: &Transaction) -> ScreeningResult {
        let mut results = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let result = match rule.check(tx) {
                Ok(result) if result.passed => {
                    tracing::debug!(rule = rule.name(), tx_id = %tx.id, "Fraud rule passed");
                    result
                }
                Ok(result) => {
                    tracing::warn!(
                        rule = rule.name(),
                        tx_id = %tx.id,
                        principal = %tx.principal_id,
                        message = result.message.as_deref().unwrap_or(""),
                        "Fraud rule flagged transaction"
                    );
                    result
                }
                Err(e) => {
                    tracing::error!(
                        rule = rule.name(),
                        tx_id = %tx.id,
                        error = %e,
                        "Fraud rule errored"
                    );
                    RuleResult::fail(rule.name(), e.to_string())
                }
            };
            results.push(result);
        }

        let is_risky = results.iter().any(|r| !r.passed);
        ScreeningResult { results, is_risky }
    }
}
