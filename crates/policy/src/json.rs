//! JSON-configured policy engine
//!
//! The document maps a role name to the actions it may perform:
//!
//! ```json
//! {
//!   "admin":   ["*"],
//!   "finance": ["payment.create", "refund.create"]
//! }
//! ```
//!
//! `"*"` grants every action to that role. Matching is exact otherwise.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use warden_core::Action;

use crate::context::{PolicyContext, PolicyResult};
use crate::error::PolicyError;
use crate::traits::{PolicyBackend, PolicyEngine};

#[derive(Debug, Clone)]
pub struct JsonPolicyEngine {
    permissions: HashMap<String, HashSet<String>>,
}

impl JsonPolicyEngine {
    /// Load and parse a policy document. Fails as a whole on any error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PolicyError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Parse a policy document held in memory
    pub fn from_json_str(content: &str) -> Result<Self, PolicyError> {
        let document: HashMap<String, Vec<String>> = serde_json::from_str(content)?;

        let permissions = document
            .into_iter()
            .map(|(role, actions)| (role, actions.into_iter().collect()))
            .collect();

        Ok(Self { permissions })
    }

    /// Does this single role permit the action?
    pub fn permits(&self, role: &str, action: &str) -> bool {
        self.permissions
            .get(role)
            .map(|actions| actions.contains(Action::ALL) || actions.contains(action))
            .unwrap_or(false)
    }

    /// Number of roles defined in the document
    pub fn role_count(&self) -> usize {
        self.permissions.len()
    }
}

impl PolicyEngine for JsonPolicyEngine {
    fn backend(&self) -> PolicyBackend {
        PolicyBackend::Json
    }

    fn check(&self, ctx: &PolicyContext) -> Result<PolicyResult, PolicyError> {
        let action = ctx.action.as_str();
        let permitting = ctx
            .roles
            .iter()
            .map(|role| role.as_str())
            .find(|role| self.permits(role, action));

        let result = match permitting {
            Some(role) => PolicyResult::allow(
                format!("role {} is granted {}", role, action),
                format!("json:{}", role),
            ),
            None => PolicyResult::deny(
                format!(
                    "no role in [{}] is granted {}",
                    ctx.role_names().join(", "),
                    action
                ),
                "json:default-deny",
            ),
        };

        tracing::debug!(action, allowed = result.allowed, "JSON policy decision");

        Ok(result)
    }
}
