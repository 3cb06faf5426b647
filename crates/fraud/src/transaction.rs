//! Transaction - the unit being screened

use serde::{Deserialize, Serialize};
use warden_core::CurrencyCode;

/// A transaction as seen by the fraud rules.
///
/// `amount` is in minor currency units (cents for USD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: i64,
    pub currency: CurrencyCode,
    /// Actor the velocity window is keyed on
    pub principal_id: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: i64,
        currency: CurrencyCode,
        principal_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            currency,
            principal_id: principal_id.into(),
        }
    }
}
