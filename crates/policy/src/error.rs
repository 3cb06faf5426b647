//! Policy errors

use std::path::Path;

use thiserror::Error;

/// Errors from policy engines
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to read policy source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON policy document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to prepare policy module {path}: {message}")]
    Compile { path: String, message: String },

    /// The backend could not produce a decision. Not a deny.
    #[error("decision unavailable: {0}")]
    Evaluation(String),

    #[error("role {role} is not authorized to {action} resource {resource}")]
    Unauthorized {
        role: String,
        action: String,
        resource: String,
    },
}

impl PolicyError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PolicyError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn compile(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        PolicyError::Compile {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create an authorization denial
    pub fn unauthorized(
        role: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        PolicyError::Unauthorized {
            role: role.into(),
            action: action.into(),
            resource: resource.into(),
        }
    }

    /// True when the engine failed to decide at all
    pub fn is_decision_unavailable(&self) -> bool {
        matches!(self, PolicyError::Evaluation(_))
    }

    /// True for an explicit RBAC denial
    pub fn is_denial(&self) -> bool {
        matches!(self, PolicyError::Unauthorized { .. })
    }
}
