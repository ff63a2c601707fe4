//! Miscellaneous investment domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire model for a miscellaneous investment (anything that is not a bank
/// account, fund, or stock).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Miscellaneous {
    pub id: i32,
    pub investment_name: String,
    pub balance: Decimal,
}

/// Input model for creating a miscellaneous investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMiscellaneous {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub investment_name: String,
    pub balance: Decimal,
}
