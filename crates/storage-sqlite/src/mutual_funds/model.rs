//! Database models for mutual funds and their transactions.
//!
//! Transaction dates live in TIMESTAMP columns as naive UTC; the wire models
//! use `DateTime<Utc>`. `buy_ids` is a JSON integer array in a TEXT column.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use investments_core::mapping::CreatePolicy;
use investments_core::mutual_funds::{
    MutualFund, MutualFundBuyTransaction, MutualFundSellTransaction, NewMutualFund,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};
use investments_core::Result;

use crate::utils::parse_id_list_column;

/// Database row for mutual funds.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_funds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MutualFundRow {
    pub id: i32,
    pub mf_code: String,
    pub mf_name: String,
    pub amc: String,
    pub fund_type: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
    pub active: bool,
}

/// Insertable row; id and audit columns are filled by the database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_funds)]
pub struct NewMutualFundRow {
    pub mf_code: String,
    pub mf_name: String,
    pub amc: String,
    pub fund_type: String,
    pub active: bool,
}

impl NewMutualFundRow {
    pub fn from_new(fund: NewMutualFund, policy: &CreatePolicy) -> Result<Self> {
        policy.require_skip("id")?;
        policy.require_skip("created_at")?;
        policy.require_skip("modified_at")?;
        Ok(Self {
            mf_code: fund.mf_code,
            mf_name: fund.mf_name,
            amc: fund.amc,
            fund_type: fund.fund_type,
            active: policy.forced_bool("active")?,
        })
    }
}

impl From<MutualFundRow> for MutualFund {
    fn from(row: MutualFundRow) -> Self {
        Self {
            id: row.id,
            mf_code: row.mf_code,
            mf_name: row.mf_name,
            amc: row.amc,
            fund_type: row.fund_type,
        }
    }
}

/// Database row for buy transactions. No active column here; visibility is
/// driven by `is_sold_out`.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_fund_buy_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MutualFundBuyTransactionRow {
    pub id: i32,
    pub mf_id: i32,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub buy_date: NaiveDateTime,
    pub sold_units: f64,
    pub is_sold_out: bool,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_fund_buy_transactions)]
pub struct NewMutualFundBuyTransactionRow {
    pub mf_id: i32,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub buy_date: NaiveDateTime,
    pub sold_units: f64,
    pub is_sold_out: bool,
}

impl NewMutualFundBuyTransactionRow {
    pub fn from_new(
        transaction: NewMutualFundBuyTransaction,
        policy: &CreatePolicy,
    ) -> Result<Self> {
        policy.require_skip("id")?;
        policy.require_skip("created_at")?;
        policy.require_skip("modified_at")?;
        Ok(Self {
            mf_id: transaction.mf_id,
            nav: transaction.nav,
            units: transaction.units,
            charge: transaction.charge,
            buy_date: transaction.buy_date.naive_utc(),
            sold_units: transaction.sold_units,
            // The client value is discarded; the policy decides.
            is_sold_out: policy.forced_bool("is_sold_out")?,
        })
    }
}

impl From<MutualFundBuyTransactionRow> for MutualFundBuyTransaction {
    fn from(row: MutualFundBuyTransactionRow) -> Self {
        Self {
            id: row.id,
            mf_id: row.mf_id,
            nav: row.nav,
            units: row.units,
            charge: row.charge,
            buy_date: Utc.from_utc_datetime(&row.buy_date),
            sold_units: row.sold_units,
            is_sold_out: row.is_sold_out,
        }
    }
}

/// Database row for sell transactions.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_fund_sell_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MutualFundSellTransactionRow {
    pub id: i32,
    pub mf_id: i32,
    pub buy_ids: String,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub sold_date: NaiveDateTime,
    pub profit_loss: f64,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::mutual_fund_sell_transactions)]
pub struct NewMutualFundSellTransactionRow {
    pub mf_id: i32,
    pub buy_ids: String,
    pub nav: f64,
    pub units: f64,
    pub charge: f64,
    pub sold_date: NaiveDateTime,
    pub profit_loss: f64,
}

impl NewMutualFundSellTransactionRow {
    pub fn from_new(
        transaction: NewMutualFundSellTransaction,
        policy: &CreatePolicy,
    ) -> Result<Self> {
        policy.require_skip("id")?;
        policy.require_skip("created_at")?;
        policy.require_skip("modified_at")?;
        let buy_ids_json = serde_json::to_string(&transaction.buy_ids)?;
        Ok(Self {
            mf_id: transaction.mf_id,
            buy_ids: buy_ids_json,
            nav: transaction.nav,
            units: transaction.units,
            charge: transaction.charge,
            sold_date: transaction.sold_date.naive_utc(),
            profit_loss: transaction.profit_loss,
        })
    }
}

impl From<MutualFundSellTransactionRow> for MutualFundSellTransaction {
    fn from(row: MutualFundSellTransactionRow) -> Self {
        Self {
            id: row.id,
            mf_id: row.mf_id,
            buy_ids: parse_id_list_column(&row.buy_ids, "buy_ids"),
            nav: row.nav,
            units: row.units,
            charge: row.charge,
            sold_date: Utc.from_utc_datetime(&row.sold_date),
            profit_loss: row.profit_loss,
        }
    }
}
