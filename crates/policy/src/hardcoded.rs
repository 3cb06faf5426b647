//! Hardcoded policy engine - the RBAC matrix behind the engine contract
//!
//! Always constructible and never fails, so the factory can always fall
//! back to it.

use warden_core::Resource;

use crate::context::{PolicyContext, PolicyResult};
use crate::error::PolicyError;
use crate::rbac::RbacMatrix;
use crate::traits::{PolicyBackend, PolicyEngine};

#[derive(Debug, Clone, Default)]
pub struct HardcodedPolicyEngine {
    matrix: RbacMatrix,
}

impl HardcodedPolicyEngine {
    pub fn new() -> Self {
        Self {
            matrix: RbacMatrix::new(),
        }
    }

    /// Resolve the (verb, resource) pair the matrix understands.
    ///
    /// `payment.create` becomes `("create", "transaction")`; an explicit
    /// resource on the context wins over the action's qualifier.
    fn resolve<'a>(ctx: &'a PolicyContext) -> (&'a str, Resource) {
        let qualified = ctx.action.split_qualified();
        let verb = qualified
            .map(|(_, verb)| verb)
            .unwrap_or_else(|| ctx.action.as_str());

        let resource = match (&ctx.resource, qualified) {
            (Some(resource), _) => Resource::canonical(resource.as_str()),
            (None, Some((resource, _))) => Resource::canonical(resource),
            (None, None) => Resource::new(""),
        };

        (verb, resource)
    }
}

impl PolicyEngine for HardcodedPolicyEngine {
    fn backend(&self) -> PolicyBackend {
        PolicyBackend::Hardcoded
    }

    fn check(&self, ctx: &PolicyContext) -> Result<PolicyResult, PolicyError> {
        let (verb, resource) = Self::resolve(ctx);

        let result = match self.matrix.can_any(&ctx.roles, verb, resource.as_str()) {
            Some(role) => PolicyResult::allow(
                format!("role {} may {} {}", role, verb, resource),
                format!("rbac:{}", role),
            ),
            None => PolicyResult::deny(
                format!(
                    "no role in [{}] may {} {}",
                    ctx.role_names().join(", "),
                    verb,
                    resource
                ),
                "rbac:default-deny",
            ),
        };

        tracing::debug!(
            action = %ctx.action,
            allowed = result.allowed,
            "Hardcoded policy decision"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(roles: &[&str], action: &str) -> PolicyResult {
        HardcodedPolicyEngine::new()
            .check(&PolicyContext::new(roles.iter().copied(), action))
            .unwrap()
    }

    #[test]
    fn test_admin_any_action() {
        let result = check(&["admin"], "any.action");
        assert!(result.allowed);
        assert_eq!(result.rules, vec!["rbac:admin"]);
    }

    #[test]
    fn test_finance_payment_vs_zone() {
        assert!(check(&["finance"], "payment.create").allowed);
        assert!(check(&["finance"], "refund.create").allowed);
        assert!(!check(&["finance"], "zone.create").allowed);
        assert!(check(&["finance"], "zone.read").allowed);
    }

    #[test]
    fn test_multi_role_zone_create() {
        let result = check(&["finance", "developer"], "zone.create");
        assert!(result.allowed);
        assert_eq!(result.rules, vec!["rbac:developer"]);
    }

    #[test]
    fn test_unknown_role_denied() {
        let result = check(&["intruder"], "payment.create");
        assert!(!result.allowed);
        assert_eq!(result.rules, vec!["rbac:default-deny"]);
        assert!(result.reason.contains("intruder"));
    }

    #[test]
    fn test_explicit_resource_wins() {
        let engine = HardcodedPolicyEngine::new();

        let ctx = PolicyContext::new(["developer"], "create").with_resource("api-key");
        assert!(engine.check(&ctx).unwrap().allowed);

        let ctx = PolicyContext::new(["developer"], "create").with_resource("ledger");
        assert!(!engine.check(&ctx).unwrap().allowed);
    }

    #[test]
    fn test_unqualified_action_without_resource() {
        assert!(check(&["member"], "read").allowed);
        assert!(!check(&["member"], "create").allowed);
        assert!(!check(&["developer"], "create").allowed);
        assert!(check(&["owner"], "*").allowed);
    }

    #[test]
    fn test_backend() {
        assert_eq!(
            HardcodedPolicyEngine::new().backend(),
            PolicyBackend::Hardcoded
        );
    }
}
