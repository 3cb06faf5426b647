//! Rego policy engine - evaluates an Open Policy Agent module in-process
//!
//! The module is read and parsed once at construction. Only read and parse
//! failures reject a module; anything the module does at evaluation time is
//! reported by `check`. Each `check` clones the prepared interpreter, so
//! evaluation never touches shared mutable state and never does I/O.
//!
//! Input document: `{"roles": [...], "action": "...", "resource"?: "..."}`.
//! The entrypoint query must yield a boolean:
//! - `true` / `false` → allow / deny
//! - no result (undefined) → deny
//! - any other value → deny
//! - evaluation error → [`PolicyError::Evaluation`]

use std::path::Path;

use regorus::{Engine, QueryResults, Value};
use serde_json::json;

use crate::context::{PolicyContext, PolicyResult};
use crate::error::PolicyError;
use crate::traits::{PolicyBackend, PolicyEngine};

/// Entrypoint evaluated when none is configured
pub const DEFAULT_QUERY: &str = "data.warden.authz.allow";

/// What the module produced for one input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Decided(bool),
    Undefined,
    Malformed(String),
}

#[derive(Clone)]
pub struct RegoPolicyEngine {
    prepared: Engine,
    query: String,
    source: String,
}

impl RegoPolicyEngine {
    /// Read and prepare a module from disk.
    pub fn from_file(
        path: impl AsRef<Path>,
        query: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let module = std::fs::read_to_string(path).map_err(|e| PolicyError::io(path, e))?;
        Self::from_source(path.display().to_string(), module, query)
    }

    /// Prepare a module held in memory. `name` is used in diagnostics.
    pub fn from_source(
        name: impl Into<String>,
        module: impl Into<String>,
        query: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        let name = name.into();
        let mut prepared = Engine::new();
        prepared
            .add_policy(name.clone(), module.into())
            .map_err(|e| PolicyError::compile(name.as_str(), e))?;

        Ok(Self {
            prepared,
            query: query.into(),
            source: name,
        })
    }

    /// Entrypoint query this engine evaluates
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Module name (usually its path)
    pub fn source(&self) -> &str {
        &self.source
    }

    fn evaluate(&self, input: &serde_json::Value) -> anyhow::Result<Outcome> {
        let mut engine = self.prepared.clone();
        engine.set_input(Value::from_json_str(&input.to_string())?);
        let results = engine.eval_query(self.query.clone(), false)?;
        Ok(outcome(&results))
    }

    fn input(ctx: &PolicyContext) -> serde_json::Value {
        let mut input = json!({
            "roles": ctx.role_names(),
            "action": ctx.action.as_str(),
        });
        if let Some(resource) = &ctx.resource {
            input["resource"] = json!(resource.as_str());
        }
        input
    }
}

/// First expression of the first result, if it is a boolean.
fn outcome(results: &QueryResults) -> Outcome {
    let value = match results
        .result
        .first()
        .and_then(|result| result.expressions.first())
    {
        Some(expression) => &expression.value,
        None => return Outcome::Undefined,
    };

    match value {
        Value::Bool(decision) => Outcome::Decided(*decision),
        Value::Undefined => Outcome::Undefined,
        other => Outcome::Malformed(format!("{:?}", other)),
    }
}

impl PolicyEngine for RegoPolicyEngine {
    fn backend(&self) -> PolicyBackend {
        PolicyBackend::Rego
    }

    fn check(&self, ctx: &PolicyContext) -> Result<PolicyResult, PolicyError> {
        let outcome = self
            .evaluate(&Self::input(ctx))
            .map_err(|e| PolicyError::Evaluation(format!("{}: {:#}", self.query, e)))?;

        let rule = format!("rego:{}", self.query);
        let result = match outcome {
            Outcome::Decided(true) => PolicyResult::allow("allowed by Rego policy", rule),
            Outcome::Decided(false) => PolicyResult::deny("denied by Rego policy", rule),
            Outcome::Undefined => PolicyResult::deny("Rego policy produced no decision", rule),
            Outcome::Malformed(value) => {
                tracing::warn!(
                    query = %self.query,
                    value = %value,
                    "Rego policy produced a non-boolean decision"
                );
                PolicyResult::deny("Rego policy produced a non-boolean decision", rule)
            }
        };

        tracing::debug!(
            action = %ctx.action,
            allowed = result.allowed,
            "Rego policy decision"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = r#"
package warden.authz

import rego.v1

default allow := false

allow if {
	some role in input.roles
	"*" in roles[role]
}

allow if {
	some role in input.roles
	input.action in roles[role]
}

roles := {
	"admin": ["*"],
	"finance": ["payment.create", "refund.create"],
	"developer": ["zone.create", "flow.deploy"]
}
"#;

    fn engine() -> RegoPolicyEngine {
        RegoPolicyEngine::from_source("test.rego", MODULE, DEFAULT_QUERY).unwrap()
    }

    fn allowed(engine: &RegoPolicyEngine, roles: &[&str], action: &str) -> bool {
        engine
            .check(&PolicyContext::new(roles.iter().copied(), action))
            .unwrap()
            .allowed
    }

    #[test]
    fn test_decisions() {
        let engine = engine();

        assert!(allowed(&engine, &["admin"], "any.action"));
        assert!(allowed(&engine, &["finance"], "payment.create"));
        assert!(!allowed(&engine, &["finance"], "zone.create"));
        assert!(allowed(&engine, &["developer"], "flow.deploy"));
        assert!(!allowed(&engine, &["intruder"], "payment.create"));
        assert!(allowed(&engine, &["finance", "developer"], "zone.create"));
    }

    #[test]
    fn test_rules_name_the_query() {
        let result = engine().check(&PolicyContext::new(["admin"], "x")).unwrap();
        assert_eq!(result.rules, vec!["rego:data.warden.authz.allow"]);
    }

    #[test]
    fn test_undefined_decision_is_deny() {
        let module = r#"
package warden.authz

import rego.v1

allow if input.action == "never"
"#;
        let engine =
            RegoPolicyEngine::from_source("undefined.rego", module, DEFAULT_QUERY).unwrap();
        let result = engine
            .check(&PolicyContext::new(["admin"], "read"))
            .unwrap();
        assert!(!result.allowed);
    }

    #[test]
    fn test_missing_entrypoint_is_deny() {
        let engine =
            RegoPolicyEngine::from_source("test.rego", MODULE, "data.other.authz.allow").unwrap();
        let result = engine
            .check(&PolicyContext::new(["admin"], "read"))
            .unwrap();
        assert!(!result.allowed);
    }

    #[test]
    fn test_non_boolean_decision_is_deny() {
        let module = r#"
package warden.authz

allow := "yes"
"#;
        let engine = RegoPolicyEngine::from_source("string.rego", module, DEFAULT_QUERY).unwrap();
        let result = engine
            .check(&PolicyContext::new(["admin"], "read"))
            .unwrap();
        assert!(!result.allowed);
        assert!(result.reason.contains("non-boolean"));
    }

    #[test]
    fn test_syntax_error_fails_construction() {
        let err =
            RegoPolicyEngine::from_source("broken.rego", "package p\n allow := {", DEFAULT_QUERY)
                .err()
                .unwrap();
        assert!(matches!(err, PolicyError::Compile { .. }));
        assert!(err.to_string().contains("broken.rego"));
    }

    const FAILS_ON_BOOM: &str = r#"
package warden.authz

import rego.v1

default allow := false

allow if {
	input.action == "boom"
	to_number("not-a-number") > 0
}
"#;

    #[test]
    fn test_evaluation_error_is_decision_unavailable() {
        let engine =
            RegoPolicyEngine::from_source("boom.rego", FAILS_ON_BOOM, DEFAULT_QUERY).unwrap();

        let err = engine
            .check(&PolicyContext::new(["admin"], "boom"))
            .err()
            .unwrap();
        assert!(err.is_decision_unavailable());
        assert!(!err.is_denial());
        assert!(err.to_string().starts_with("decision unavailable"));

        let result = engine
            .check(&PolicyContext::new(["admin"], "read"))
            .unwrap();
        assert!(!result.allowed);
    }

    #[test]
    fn test_input_dependent_failure_does_not_block_construction() {
        let module = r#"
package warden.authz

import rego.v1

allow if {
	per_role := 100 / count(input.roles)
	per_role > 10
}
"#;
        let engine =
            RegoPolicyEngine::from_source("per_role.rego", module, DEFAULT_QUERY).unwrap();

        assert!(engine
            .check(&PolicyContext::new(["admin"], "read"))
            .unwrap()
            .allowed);

        let err = engine
            .check(&PolicyContext::new(Vec::<&str>::new(), "read"))
            .err()
            .unwrap();
        assert!(err.is_decision_unavailable());
    }

    #[test]
    fn test_from_file_records_source_and_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.rego");
        std::fs::write(&path, MODULE).unwrap();

        let engine = RegoPolicyEngine::from_file(&path, "data.warden.authz.allow").unwrap();
        assert_eq!(engine.source(), path.display().to_string());
        assert_eq!(engine.query(), "data.warden.authz.allow");
    }

    #[test]
    fn test_missing_file_fails_construction() {
        let err = RegoPolicyEngine::from_file("/nonexistent/policies.rego", DEFAULT_QUERY)
            .err()
            .unwrap();
        assert!(matches!(err, PolicyError::Io { .. }));
    }

    #[test]
    fn test_resource_passed_in_input() {
        let module = r#"
package warden.authz

import rego.v1

default allow := false

allow if input.resource == "ledger"
"#;
        let engine =
            RegoPolicyEngine::from_source("resource.rego", module, DEFAULT_QUERY).unwrap();

        let ctx = PolicyContext::new(["member"], "read").with_resource("ledger");
        assert!(engine.check(&ctx).unwrap().allowed);

        let ctx = PolicyContext::new(["member"], "read");
        assert!(!engine.check(&ctx).unwrap().allowed);
    }
}
