//! Action and Resource identifiers
//!
//! Actions are either coarse verbs (`create`, `read`, `update`, `delete`, `*`)
//! or domain-qualified (`payment.create`). Resources name a protected
//! resource category (`zone`, `ledger`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation a principal wants to perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    pub const CREATE: &'static str = "create";
    pub const READ: &'static str = "read";
    pub const UPDATE: &'static str = "update";
    pub const DELETE: &'static str = "delete";
    /// Wildcard: every action
    pub const ALL: &'static str = "*";

    pub const PAYMENT_CREATE: &'static str = "payment.create";
    pub const REFUND_CREATE: &'static str = "refund.create";
    pub const ZONE_CREATE: &'static str = "zone.create";
    pub const FLOW_DEPLOY: &'static str = "flow.deploy";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a domain-qualified action into `(resource, verb)`.
    ///
    /// Returns `None` for coarse actions (`create`, `*`) and for malformed
    /// ones with an empty side (`.create`, `zone.`).
    ///
    /// ```
    /// use warden_core::Action;
    ///
    /// assert_eq!(Action::new("zone.create").split_qualified(), Some(("zone", "create")));
    /// assert_eq!(Action::new("read").split_qualified(), None);
    /// ```
    pub fn split_qualified(&self) -> Option<(&str, &str)> {
        match self.0.split_once('.') {
            Some((resource, verb)) if !resource.is_empty() && !verb.is_empty() => {
                Some((resource, verb))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A protected resource category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(String);

impl Resource {
    pub const ZONE: &'static str = "zone";
    pub const FLOW: &'static str = "flow";
    pub const LEDGER: &'static str = "ledger";
    pub const TRANSACTION: &'static str = "transaction";
    pub const API_KEY: &'static str = "api_key";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Map a resource name to its canonical category.
    ///
    /// `api-key` is spelled `api_key`; money-movement domains
    /// (`payment`, `refund`, `payout`) are transactions.
    pub fn canonical(name: &str) -> Self {
        match name {
            "api-key" | "apikey" => Self::new(Self::API_KEY),
            "payment" | "payments" | "refund" | "refunds" | "payout" | "payouts" => {
                Self::new(Self::TRANSACTION)
            }
            other => Self::new(other),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qualified() {
        assert_eq!(
            Action::new(Action::PAYMENT_CREATE).split_qualified(),
            Some(("payment", "create"))
        );
        assert_eq!(Action::new(Action::ALL).split_qualified(), None);
        assert_eq!(Action::new(".create").split_qualified(), None);
        assert_eq!(Action::new("zone.").split_qualified(), None);
    }

    #[test]
    fn test_canonical_resource() {
        assert_eq!(Resource::canonical("api-key").as_str(), Resource::API_KEY);
        assert_eq!(
            Resource::canonical("payment").as_str(),
            Resource::TRANSACTION
        );
        assert_eq!(
            Resource::canonical("refund").as_str(),
            Resource::TRANSACTION
        );
        assert_eq!(Resource::canonical("zone").as_str(), Resource::ZONE);
        assert_eq!(Resource::canonical("widget").as_str(), "widget");
    }

    #[test]
    fn test_serde_transparent() {
        let action: Action = serde_json::from_str("\"flow.deploy\"").unwrap();
        assert_eq!(action.as_str(), Action::FLOW_DEPLOY);
        assert_eq!(
            serde_json::to_string(&Resource::new("zone")).unwrap(),
            "\"zone\""
        );
    }
}
