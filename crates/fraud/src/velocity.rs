//! Velocity rule - per-principal sliding window
//!
//! Each principal owns a queue of recent timestamps. A check appends the
//! current time, drops everything older than the window and compares the
//! remaining count against the threshold. All three steps run under the
//! principal's map entry, so concurrent checks for the same principal
//! serialize while different principals proceed in parallel.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::error::FraudResult;
use crate::rule::{FraudRule, RuleResult};
use crate::transaction::Transaction;

/// Flags a principal that transacts more than `threshold` times within
/// `window`.
#[derive(Debug)]
pub struct VelocityRule {
    window: Duration,
    threshold: usize,
    history: DashMap<String, VecDeque<DateTime<Utc>>>,
}

impl VelocityRule {
    pub const NAME: &'static str = "velocity";

    pub fn new(window: Duration, threshold: usize) -> Self {
        Self {
            window,
            threshold,
            history: DashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Check with an explicit timestamp instead of the wall clock
    pub fn check_at(&self, tx: &Transaction, now: DateTime<Utc>) -> FraudResult<RuleResult> {
        let count = self.record(&tx.principal_id, || now);
        Ok(self.judge(count))
    }

    /// Timestamps currently stored for a principal
    pub fn count_for(&self, principal_id: &str) -> usize {
        self.history
            .get(principal_id)
            .map(|timestamps| timestamps.len())
            .unwrap_or(0)
    }

    /// Number of principals with stored history
    pub fn tracked_principals(&self) -> usize {
        self.history.len()
    }

    /// Drop principals whose whole window has drained as of `now`.
    ///
    /// Returns how many principals were removed. Never called implicitly.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let window = self.window;
        let before = self.history.len();

        self.history.retain(|_, timestamps| {
            timestamps.retain(|t| now.signed_duration_since(*t) < window);
            !timestamps.is_empty()
        });

        let removed = before.saturating_sub(self.history.len());
        if removed > 0 {
            tracing::debug!(removed, "Evicted idle principals from velocity window");
        }
        removed
    }

    /// Append, prune and count as one unit under the principal's entry.
    ///
    /// `clock` runs after the entry is held so timestamps within one
    /// principal's queue are non-decreasing.
    fn record(&self, principal_id: &str, clock: impl FnOnce() -> DateTime<Utc>) -> usize {
        let mut timestamps = self.history.entry(principal_id.to_string()).or_default();
        let now = clock();
        let window = self.window;

        timestamps.push_back(now);
        timestamps.retain(|t| now.signed_duration_since(*t) < window);
        timestamps.len()
    }

    fn judge(&self, count: usize) -> RuleResult {
        if count > self.threshold {
            RuleResult::fail(
                Self::NAME,
                format!(
                    "Velocity high: {} transactions in {}s",
                    count,
                    self.window.num_seconds()
                ),
            )
        } else {
            RuleResult::pass(Self::NAME)
        }
    }
}

impl FraudRule for VelocityRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check(&self, tx: &Transaction) -> FraudResult<RuleResult> {
        let count = self.record(&tx.principal_id, Utc::now);
        Ok(self.judge(count))
    }
}
