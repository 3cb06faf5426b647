//! Warden CLI - Main entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;
use warden_cli::{commands, AppContext};
use warden_core::CurrencyCode;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Warden - authorization and fraud screening", long_about = None)]
struct Cli {
    /// Rego policy module (overrides WARDEN_POLICY_REGO)
    #[arg(long, global = true)]
    policy_rego: Option<PathBuf>,

    /// JSON policy document (overrides WARDEN_POLICY_JSON)
    #[arg(long, global = true)]
    policy_json: Option<PathBuf>,

    /// Fraud configuration file (overrides WARDEN_FRAUD_CONFIG)
    #[arg(long, global = true)]
    fraud_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a role set may perform an action
    Authorize {
        /// Role held by the caller (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
        /// Action, e.g. payment.create
        action: String,
        /// Optional resource the action targets
        #[arg(long)]
        resource: Option<String>,
    },

    /// Check one role against the RBAC matrix
    Validate {
        role: String,
        action: String,
        resource: String,
    },

    /// Screen a single transaction
    Screen {
        /// Principal the velocity window is keyed on
        #[arg(long)]
        principal: String,
        /// Amount in minor units
        #[arg(long, allow_hyphen_values = true)]
        amount: i64,
        /// ISO currency code
        #[arg(long, default_value = "USD")]
        currency: CurrencyCode,
        /// Transaction ID (generated if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Screen a JSON array of transactions in order
    ScreenBatch {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Show which policy backend was selected
    Backend,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let ctx = AppContext::from_options(
        cli.policy_rego.as_deref(),
        cli.policy_json.as_deref(),
        cli.fraud_config.as_deref(),
    )?;

    match cli.command {
        Commands::Authorize {
            roles,
            action,
            resource,
        } => {
            commands::authorize(&ctx, &roles, &action, resource.as_deref())?;
        }

        Commands::Validate {
            role,
            action,
            resource,
        } => {
            commands::validate(&ctx, &role, &action, &resource)?;
        }

        Commands::Screen {
            principal,
            amount,
            currency,
            id,
        } => {
            let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
            commands::screen(&ctx, &id, &principal, amount, currency)?;
        }

        Commands::ScreenBatch { file } => {
            commands::screen_batch(&ctx, &file)?;
        }

        Commands::Backend => {
            commands::backend(&ctx)?;
        }
    }

    Ok(())
}
