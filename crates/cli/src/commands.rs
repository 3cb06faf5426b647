//! CLI commands
//!
//! Each command prints its outcome and returns it so callers (and tests)
//! can inspect the decision.

use std::path::Path;

use anyhow::Context as _;
use warden_core::CurrencyCode;
use warden_fraud::{ScreeningResult, Transaction};
use warden_policy::{PolicyBackend, PolicyContext, PolicyResult};

use crate::context::AppContext;

/// Authorize a role set for an action
///
/// A deny is a normal outcome. A decision that could not be produced is an
/// error.
pub fn authorize(
    ctx: &AppContext,
    roles: &[String],
    action: &str,
    resource: Option<&str>,
) -> Result<PolicyResult, anyhow::Error> {
    let mut policy_ctx = PolicyContext::new(roles.iter().map(String::as_str), action);
    if let Some(resource) = resource {
        policy_ctx = policy_ctx.with_resource(resource);
    }

    let backend = ctx.backend();
    let result = ctx
        .policy
        .check(&policy_ctx)
        .with_context(|| format!("{} backend could not decide {}", backend, action))?;

    if result.is_allowed() {
        println!("✅ Allowed ({} backend): {}", backend, result.reason);
    } else {
        println!("❌ Denied ({} backend): {}", backend, result.reason);
    }
    if !result.rules.is_empty() {
        println!("   Rules: {}", result.rules.join(", "));
    }

    Ok(result)
}

/// Check one (role, action, resource) against the RBAC matrix
pub fn validate(
    ctx: &AppContext,
    role: &str,
    action: &str,
    resource: &str,
) -> Result<(), anyhow::Error> {
    ctx.rbac.validate_action(role, action, resource)?;
    println!("✅ Role {} may {} {}", role, action, resource);
    Ok(())
}

/// Screen a single transaction
pub fn screen(
    ctx: &AppContext,
    id: &str,
    principal_id: &str,
    amount: i64,
    currency: CurrencyCode,
) -> Result<ScreeningResult, anyhow::Error> {
    let tx = Transaction::new(id, amount, currency, principal_id);
    let result = ctx.fraud.check(&tx);
    print_screening(&tx, &result);
    Ok(result)
}

/// Screen a JSON array of transactions in order through one engine
pub fn screen_batch(ctx: &AppContext, path: &Path) -> Result<Vec<ScreeningResult>, anyhow::Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let transactions: Vec<Transaction> = serde_json::from_str(&content)
        .with_context(|| format!("parsing transactions from {}", path.display()))?;

    let results: Vec<ScreeningResult> = transactions
        .iter()
        .map(|tx| {
            let result = ctx.fraud.check(tx);
            print_screening(tx, &result);
            result
        })
        .collect();

    let risky = results.iter().filter(|r| r.is_risky).count();
    println!(
        "📊 Screened {} transactions, {} risky",
        results.len(),
        risky
    );

    Ok(results)
}

/// Report the policy backend the factory resolved
pub fn backend(ctx: &AppContext) -> Result<PolicyBackend, anyhow::Error> {
    let backend = ctx.backend();
    println!("Policy backend: {}", backend);
    Ok(backend)
}

fn print_screening(tx: &Transaction, result: &ScreeningResult) {
    if result.is_risky {
        println!(
            "⚠️  {} flagged ({} {} from {})",
            tx.id, tx.amount, tx.currency, tx.principal_id
        );
    } else {
        println!(
            "✅ {} clear ({} {} from {})",
            tx.id, tx.amount, tx.currency, tx.principal_id
        );
    }

    for rule in result.failed() {
        println!(
            "   {}: {}",
            rule.rule_name,
            rule.message.as_deref().unwrap_or("failed")
        );
    }
}
