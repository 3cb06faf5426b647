//! Application context - wires both pipelines together

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use warden_fraud::{FraudConfig, FraudEngine};
use warden_policy::{build_engine, PolicyBackend, PolicyConfig, PolicyEngine, RbacMatrix};

/// Environment variable naming a fraud configuration file
pub const ENV_FRAUD_CONFIG: &str = "WARDEN_FRAUD_CONFIG";

/// Application context - one policy engine, one fraud engine
pub struct AppContext {
    pub policy: Arc<dyn PolicyEngine>,
    pub fraud: FraudEngine,
    pub rbac: RbacMatrix,
}

impl AppContext {
    /// Build from explicit configuration
    pub fn new(policy_config: &PolicyConfig, fraud_config: &FraudConfig) -> Self {
        let policy = build_engine(policy_config);
        let fraud = FraudEngine::from_config(fraud_config);

        tracing::debug!(
            backend = %policy.backend(),
            rules = ?fraud.rule_names(),
            "Application context ready"
        );

        Self {
            policy,
            fraud,
            rbac: RbacMatrix::new(),
        }
    }

    /// Build from the environment, with command-line overrides on top
    pub fn from_options(
        policy_rego: Option<&Path>,
        policy_json: Option<&Path>,
        fraud_config: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut policy_config = PolicyConfig::from_env();
        if let Some(path) = policy_rego {
            policy_config = policy_config.with_rego_path(path);
        }
        if let Some(path) = policy_json {
            policy_config = policy_config.with_json_path(path);
        }

        let fraud_path = fraud_config.map(Path::to_path_buf).or_else(|| {
            std::env::var(ENV_FRAUD_CONFIG)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(Into::into)
        });

        let fraud_config = match fraud_path {
            Some(path) => FraudConfig::from_file(&path)
                .with_context(|| format!("loading fraud config {}", path.display()))?,
            None => FraudConfig::default(),
        };

        Ok(Self::new(&policy_config, &fraud_config))
    }

    pub fn backend(&self) -> PolicyBackend {
        self.policy.backend()
    }
}
