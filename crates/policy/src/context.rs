//! Request-scoped input and output of an authorization decision

use serde::{Deserialize, Serialize};
use warden_core::{Action, Resource, Role};

/// What is being asked: roles + action [+ resource]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContext {
    /// Every role the principal holds. Any one of them may permit.
    pub roles: Vec<Role>,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl PolicyContext {
    pub fn new<R>(roles: impl IntoIterator<Item = R>, action: impl Into<Action>) -> Self
    where
        R: Into<Role>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            action: action.into(),
            resource: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<Resource>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Role names as plain strings (for engines that speak strings)
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(Role::as_str).collect()
    }
}

/// The decision, with an explanation of who decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResult {
    pub allowed: bool,
    pub reason: String,
    /// Identifiers of the rules or paths that produced the decision
    pub rules: Vec<String>,
}

impl PolicyResult {
    pub fn allow(reason: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: reason.into(),
            rules: vec![rule.into()],
        }
    }

    pub fn deny(reason: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
            rules: vec![rule.into()],
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = PolicyContext::new(["finance", "developer"], "zone.create").with_resource("zone");

        assert_eq!(ctx.role_names(), vec!["finance", "developer"]);
        assert_eq!(ctx.action.as_str(), "zone.create");
        assert_eq!(ctx.resource.as_ref().map(Resource::as_str), Some("zone"));
    }

    #[test]
    fn test_result_serialization() {
        let result = PolicyResult::deny("no role permits", "json:default-deny");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["allowed"], false);
        assert_eq!(json["rules"][0], "json:default-deny");
    }

    #[test]
    fn test_context_without_resource_omits_field() {
        let ctx = PolicyContext::new(["member"], "read");
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(!json.contains("resource"));

        let parsed: PolicyContext =
            serde_json::from_str(r#"{"roles":["admin"],"action":"any.action"}"#).unwrap();
        assert!(parsed.resource.is_none());
    }
}
