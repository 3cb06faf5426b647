//! Policy engine trait - the contract every backend implements

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::{PolicyContext, PolicyResult};
use crate::error::PolicyError;

/// Which backend produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyBackend {
    /// Compiled Rego module
    Rego,
    /// Role → actions table loaded from JSON
    Json,
    /// Built-in RBAC matrix
    Hardcoded,
}

impl fmt::Display for PolicyBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyBackend::Rego => "rego",
            PolicyBackend::Json => "json",
            PolicyBackend::Hardcoded => "hardcoded",
        };
        f.write_str(name)
    }
}

/// An authorization backend.
///
/// Engines are built once and are read-only afterwards; `check` takes
/// `&self` and must be callable from any number of threads at once.
pub trait PolicyEngine: Send + Sync {
    /// Backend kind, for logging and diagnostics
    fn backend(&self) -> PolicyBackend;

    /// Decide whether the context is permitted.
    ///
    /// `Ok` carries an allow or a deny. `Err(PolicyError::Evaluation)` means
    /// no decision could be made; callers must not read it as either.
    fn check(&self, ctx: &PolicyContext) -> Result<PolicyResult, PolicyError>;
}
