//! Amount-threshold rule

use crate::error::FraudResult;
use crate::rule::{FraudRule, RuleResult};
use crate::transaction::Transaction;

/// Flags transactions strictly above a fixed limit (minor units).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRule {
    limit: i64,
}

impl AmountRule {
    pub const NAME: &'static str = "amount_threshold";

    pub fn new(limit: i64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl FraudRule for AmountRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check(&self, tx: &Transaction) -> FraudResult<RuleResult> {
        if tx.amount > self.limit {
            return Ok(RuleResult::fail(
                Self::NAME,
                format!("Amount {} exceeds limit {}", tx.amount, self.limit),
            ));
        }
        Ok(RuleResult::pass(Self::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::CurrencyCode;

    fn tx(amount: i64) -> Transaction {
        Transaction::new("TX-001", amount, CurrencyCode::USD, "USER-001")
    }

    #[test]
    fn test_equal_to_limit_passes() {
        let rule = AmountRule::new(10_000);
        assert_eq!(rule.limit(), 10_000);
        assert!(rule.check(&tx(10_000)).unwrap().passed);
    }

    #[test]
    fn test_above_limit_fails() {
        let rule = AmountRule::new(10_000);
        let result = rule.check(&tx(10_001)).unwrap();

        assert!(!result.passed);
        assert_eq!(result.rule_name, "amount_threshold");
        assert_eq!(
            result.message.as_deref(),
            Some("Amount 10001 exceeds limit 10000")
        );
    }

    #[test]
    fn test_small_and_negative_amounts_pass() {
        let rule = AmountRule::new(10_000);
        assert!(rule.check(&tx(0)).unwrap().passed);
        assert!(rule.check(&tx(-500)).unwrap().passed);
    }
}
