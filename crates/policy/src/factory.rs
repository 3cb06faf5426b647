//! Policy engine factory - ordered fallback chain
//!
//! 1. Rego module (explicit or discovered); on failure log and continue
//! 2. JSON document (explicit or discovered); on failure log and continue
//! 3. Hardcoded RBAC matrix; cannot fail
//!
//! The chain always ends with a working engine.

use std::sync::Arc;

use crate::config::PolicyConfig;
use crate::hardcoded::HardcodedPolicyEngine;
use crate::json::JsonPolicyEngine;
use crate::rego::RegoPolicyEngine;
use crate::traits::PolicyEngine;

/// Build the best engine the configuration allows.
pub fn build_engine(config: &PolicyConfig) -> Arc<dyn PolicyEngine> {
    if let Some(path) = config.resolve_rego() {
        match RegoPolicyEngine::from_file(&path, config.rego_query.as_str()) {
            Ok(engine) => {
                tracing::info!(
                    source = engine.source(),
                    query = engine.query(),
                    "Using Rego policy engine"
                );
                return Arc::new(engine);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load Rego policy, trying JSON fallback"
                );
            }
        }
    }

    if let Some(path) = config.resolve_json() {
        match JsonPolicyEngine::from_file(&path) {
            Ok(engine) => {
                tracing::info!(
                    path = %path.display(),
                    roles = engine.role_count(),
                    "Using JSON policy engine"
                );
                return Arc::new(engine);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load JSON policy, falling back to hardcoded policies"
                );
            }
        }
    }

    tracing::info!("Using hardcoded policy engine");
    Arc::new(HardcodedPolicyEngine::new())
}

/// [`build_engine`] with configuration read from the environment
pub fn build_engine_from_env() -> Arc<dyn PolicyEngine> {
    build_engine(&PolicyConfig::from_env())
}
