//! Warden Fraud - Transaction risk screening
//!
//! ```text
//! Transaction ──► FraudEngine::check
//!                     │  every rule, in order, no short-circuit
//!                     ├─ AmountRule    (stateless: amount > limit)
//!                     ├─ VelocityRule  (per-principal sliding window)
//!                     └─ ...           (any FraudRule)
//!                     ▼
//!               ScreeningResult { results, is_risky }
//! ```
//!
//! A rule that errors is recorded as failed with the error text; it never
//! hides the other rules' results.

pub mod amount;
pub mod config;
pub mod engine;
pub mod error;
pub mod rule;
pub mod transaction;
pub mod velocity;

pub use amount::AmountRule;
pub use config::FraudConfig;
pub use engine::{FraudEngine, ScreeningResult};
pub use error::{FraudError, FraudResult};
pub use rule::{FraudRule, RuleResult};
pub use transaction::Transaction;
pub use velocity::VelocityRule;
