//! Database models for miscellaneous investments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use investments_core::mapping::CreatePolicy;
use investments_core::miscellaneous::{Miscellaneous, NewMiscellaneous};
use investments_core::Result;

use crate::utils::parse_decimal_column;

/// Database row for miscellaneous investments.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::miscellaneous)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MiscellaneousRow {
    pub id: i32,
    pub investment_name: String,
    pub balance: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub active: bool,
}

/// Insertable row; id and audit columns are filled by the database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::miscellaneous)]
pub struct NewMiscellaneousRow {
    pub investment_name: String,
    pub balance: String,
    pub active: bool,
}

impl NewMiscellaneousRow {
    pub fn from_new(investment: NewMiscellaneous, policy: &CreatePolicy) -> Result<Self> {
        policy.require_skip("id")?;
        policy.require_skip("created_at")?;
        policy.require_skip("modified_at")?;
        Ok(Self {
            investment_name: investment.investment_name,
            balance: investment.balance.to_string(),
            active: policy.forced_bool("active")?,
        })
    }
}

impl From<MiscellaneousRow> for Miscellaneous {
    fn from(row: MiscellaneousRow) -> Self {
        Self {
            id: row.id,
            investment_name: row.investment_name,
            balance: parse_decimal_column(&row.balance, "balance"),
        }
    }
}
