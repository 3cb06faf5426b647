//! Warden Policy - Pluggable authorization backends
//!
//! Every backend answers one question through [`PolicyEngine::check`]:
//! may a principal holding these roles perform this action?
//!
//! ```text
//! PolicyConfig ──► factory::build_engine
//!                     │
//!                     ├─ 1. Rego module   (explicit path or discovered)
//!                     ├─ 2. JSON table    (explicit path or discovered)
//!                     └─ 3. Hardcoded     (RBAC matrix, cannot fail)
//! ```
//!
//! Construction failures are logged and the chain moves on. Evaluation
//! failures are returned to the caller as [`PolicyError::Evaluation`]
//! ("decision unavailable"), which is neither allow nor deny.

pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod hardcoded;
pub mod json;
pub mod rbac;
pub mod rego;
pub mod traits;

pub use config::PolicyConfig;
pub use context::{PolicyContext, PolicyResult};
pub use error::PolicyError;
pub use factory::{build_engine, build_engine_from_env};
pub use hardcoded::HardcodedPolicyEngine;
pub use json::JsonPolicyEngine;
pub use rbac::RbacMatrix;
pub use rego::RegoPolicyEngine;
pub use traits::{PolicyBackend, PolicyEngine};
