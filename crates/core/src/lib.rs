//! Warden Core - Shared identifiers
//!
//! This crate contains the vocabulary shared by the authorization and
//! fraud-screening pipelines:
//! - `Role`, `Action`, `Resource`: opaque string identifiers with well-known constants
//! - `CurrencyCode`: validated 3-letter currency code

pub mod action;
pub mod currency;
pub mod role;

pub use action::{Action, Resource};
pub use currency::{CurrencyCode, CurrencyError};
pub use role::Role;
