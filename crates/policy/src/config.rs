//! Policy source resolution
//!
//! Each backend's source is either an explicit path (typically from the
//! environment) or the first existing file among conventional locations.

use std::path::{Path, PathBuf};

use crate::rego::DEFAULT_QUERY;

/// Explicit path to a Rego module
pub const ENV_POLICY_REGO: &str = "WARDEN_POLICY_REGO";
/// Explicit path to a JSON policy document
pub const ENV_POLICY_JSON: &str = "WARDEN_POLICY_JSON";
/// Rego entrypoint query override
pub const ENV_POLICY_QUERY: &str = "WARDEN_POLICY_QUERY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Explicit Rego module path (skips discovery)
    pub rego_path: Option<PathBuf>,
    /// Explicit JSON document path (skips discovery)
    pub json_path: Option<PathBuf>,
    /// Checked in order when `rego_path` is unset
    pub rego_locations: Vec<PathBuf>,
    /// Checked in order when `json_path` is unset
    pub json_locations: Vec<PathBuf>,
    /// Rego entrypoint
    pub rego_query: String,
}

fn conventional_locations(file_name: &str) -> Vec<PathBuf> {
    vec![
        Path::new("config").join(file_name),
        Path::new("../config").join(file_name),
        Path::new("../../config").join(file_name),
        PathBuf::from(file_name),
    ]
}

fn default_rego_locations() -> Vec<PathBuf> {
    conventional_locations("policies.rego")
}

fn default_json_locations() -> Vec<PathBuf> {
    conventional_locations("policies.json")
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            rego_path: None,
            json_path: None,
            rego_locations: default_rego_locations(),
            json_locations: default_json_locations(),
            rego_query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl PolicyConfig {
    /// Defaults plus explicit paths / query from the environment
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        config.rego_path = non_empty(ENV_POLICY_REGO).map(PathBuf::from);
        config.json_path = non_empty(ENV_POLICY_JSON).map(PathBuf::from);
        if let Some(query) = non_empty(ENV_POLICY_QUERY) {
            config.rego_query = query;
        }
        config
    }

    /// No discovery, no explicit paths: the factory will pick the hardcoded engine
    pub fn hardcoded_only() -> Self {
        Self {
            rego_locations: Vec::new(),
            json_locations: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_rego_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rego_path = Some(path.into());
        self
    }

    pub fn with_json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    pub fn with_rego_query(mut self, query: impl Into<String>) -> Self {
        self.rego_query = query.into();
        self
    }

    /// Disable conventional-location discovery for both backends
    pub fn without_discovery(mut self) -> Self {
        self.rego_locations.clear();
        self.json_locations.clear();
        self
    }

    /// Rego module to try, if any
    pub fn resolve_rego(&self) -> Option<PathBuf> {
        resolve(self.rego_path.as_ref(), &self.rego_locations)
    }

    /// JSON document to try, if any
    pub fn resolve_json(&self) -> Option<PathBuf> {
        resolve(self.json_path.as_ref(), &self.json_locations)
    }
}

fn resolve(explicit: Option<&PathBuf>, locations: &[PathBuf]) -> Option<PathBuf> {
    explicit
        .cloned()
        .or_else(|| locations.iter().find(|path| path.exists()).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations_order() {
        let config = PolicyConfig::default();

        assert_eq!(
            config.rego_locations[0],
            PathBuf::from("config/policies.rego")
        );
        assert_eq!(config.rego_locations[3], PathBuf::from("policies.rego"));
        assert_eq!(
            config.json_locations[1],
            PathBuf::from("../config/policies.json")
        );
        assert_eq!(config.rego_query, DEFAULT_QUERY);
        assert!(config.rego_path.is_none());
    }

    #[test]
    fn test_explicit_path_wins_even_if_missing() {
        let config = PolicyConfig::default().with_json_path("/nonexistent/policies.json");
        assert_eq!(
            config.resolve_json(),
            Some(PathBuf::from("/nonexistent/policies.json"))
        );
    }

    #[test]
    fn test_discovery_takes_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.json");
        let third = dir.path().join("third.json");
        std::fs::write(&second, "{}").unwrap();
        std::fs::write(&third, "{}").unwrap();

        let config = PolicyConfig {
            json_locations: vec![dir.path().join("first.json"), second.clone(), third],
            ..PolicyConfig::hardcoded_only()
        };

        assert_eq!(config.resolve_json(), Some(second));
        assert_eq!(config.resolve_rego(), None);
    }

    #[test]
    fn test_hardcoded_only_resolves_nothing() {
        let config = PolicyConfig::hardcoded_only();
        assert_eq!(config.resolve_rego(), None);
        assert_eq!(config.resolve_json(), None);
    }
}
