//! RBAC matrix - compiled-in role permissions
//!
//! | Role      | Allowed                                               |
//! |-----------|-------------------------------------------------------|
//! | owner     | everything                                            |
//! | admin     | everything                                            |
//! | finance   | any read; writes on ledger / transaction only         |
//! | developer | anything on zone / flow / api_key; read ledger / transaction |
//! | member    | read only                                             |
//! | (other)   | nothing                                               |

use warden_core::{Action, Resource, Role};

use crate::error::PolicyError;

/// Static (role, action, resource) → allow/deny table
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacMatrix;

impl RbacMatrix {
    pub fn new() -> Self {
        Self
    }

    /// Check whether a single role may perform `action` on `resource`.
    pub fn can(&self, role: &str, action: &str, resource: &str) -> bool {
        let is_read = action == Action::READ;

        match role {
            Role::OWNER | Role::ADMIN => true,
            Role::FINANCE => {
                is_read || matches!(resource, Resource::LEDGER | Resource::TRANSACTION)
            }
            Role::DEVELOPER => match resource {
                Resource::ZONE | Resource::FLOW | Resource::API_KEY => true,
                Resource::LEDGER | Resource::TRANSACTION => is_read,
                _ => false,
            },
            Role::MEMBER => is_read,
            _ => false,
        }
    }

    /// Like [`can`](Self::can), but returns a descriptive denial.
    pub fn validate_action(
        &self,
        role: &str,
        action: &str,
        resource: &str,
    ) -> Result<(), PolicyError> {
        if self.can(role, action, resource) {
            Ok(())
        } else {
            Err(PolicyError::unauthorized(role, action, resource))
        }
    }

    /// Disjunction over a role set: the first role that permits, if any.
    pub fn can_any<'a, R>(&self, roles: &'a [R], action: &str, resource: &str) -> Option<&'a str>
    where
        R: AsRef<str>,
    {
        roles
            .iter()
            .map(AsRef::as_ref)
            .find(|role| self.can(role, action, resource))
    }
}
