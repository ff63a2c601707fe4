//! Database models for stock holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use investments_core::mapping::CreatePolicy;
use investments_core::stocks::{NewStock, Stock};
use investments_core::Result;

/// Database row for stocks.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockRow {
    pub id: i32,
    pub stock_code: String,
    pub stock_name: String,
    pub stock_exchange: String,
    pub broker: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub active: bool,
}

/// Insertable row; id and audit columns are filled by the database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stocks)]
pub struct NewStockRow {
    pub stock_code: String,
    pub stock_name: String,
    pub stock_exchange: String,
    pub broker: String,
    pub active: bool,
}

impl NewStockRow {
    pub fn from_new(stock: NewStock, policy: &CreatePolicy) -> Result<Self> {
        policy.require_skip("id")?;
        policy.require_skip("created_at")?;
        policy.require_skip("modified_at")?;
        Ok(Self {
            stock_code: stock.stock_code,
            stock_name: stock.stock_name,
            stock_exchange: stock.stock_exchange,
            broker: stock.broker,
            active: policy.forced_bool("active")?,
        })
    }
}

impl From<StockRow> for Stock {
    fn from(row: StockRow) -> Self {
        Self {
            id: row.id,
            stock_code: row.stock_code,
            stock_name: row.stock_name,
            stock_exchange: row.stock_exchange,
            broker: row.broker,
        }
    }
}
