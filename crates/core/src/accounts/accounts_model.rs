//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire model for a persisted bank account (deposit, loan, or saving).
/// Lifecycle columns (active flag, audit timestamps) never appear here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub bank_name: String,
    pub branch: String,
    pub account_number: String,
    pub balance: Decimal,
}

/// Input model for creating an account. A client-supplied `id` is accepted
/// for wire compatibility and always discarded by the create policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub bank_name: String,
    pub branch: String,
    pub account_number: String,
    pub balance: Decimal,
}
