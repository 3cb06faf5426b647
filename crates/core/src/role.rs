//! Role - a principal's assigned grouping
//!
//! Roles are opaque strings. The names below are the ones the built-in
//! RBAC matrix knows about; any other name is valid but grants nothing there.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A role identifier such as `owner` or `finance`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub const OWNER: &'static str = "owner";
    pub const ADMIN: &'static str = "admin";
    pub const FINANCE: &'static str = "finance";
    pub const DEVELOPER: &'static str = "developer";
    pub const MEMBER: &'static str = "member";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
