use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use investments_core::mapping::CreatePolicy;
use investments_core::mutual_funds::{
    MutualFund, MutualFundBuyTransaction, MutualFundBuyTransactionRepositoryTrait,
    MutualFundRepositoryTrait, MutualFundSellTransaction,
    MutualFundSellTransactionRepositoryTrait, NewMutualFund, NewMutualFundBuyTransaction,
    NewMutualFundSellTransaction,
};
use investments_core::Result;

use super::model::{
    MutualFundBuyTransactionRow, MutualFundRow, MutualFundSellTransactionRow,
    NewMutualFundBuyTransactionRow, NewMutualFundRow, NewMutualFundSellTransactionRow,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{mutual_fund_buy_transactions, mutual_fund_sell_transactions, mutual_funds};

pub struct MutualFundRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MutualFundRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MutualFundRepositoryTrait for MutualFundRepository {
    fn list_active(&self) -> Result<Vec<MutualFund>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = mutual_funds::table
            .filter(mutual_funds::active.eq(true))
            .select(MutualFundRow::as_select())
            .load::<MutualFundRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(MutualFund::from).collect())
    }

    async fn insert(&self, fund: NewMutualFund, policy: CreatePolicy) -> Result<MutualFund> {
        let new_row = NewMutualFundRow::from_new(fund, &policy)?;
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(mutual_funds::table)
                    .values(&new_row)
                    .returning(MutualFundRow::as_returning())
                    .get_result::<MutualFundRow>(conn)
                    .into_core()?;
                Ok(MutualFund::from(row))
            })
            .await
    }
}

pub struct MutualFundBuyTransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MutualFundBuyTransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MutualFundBuyTransactionRepositoryTrait for MutualFundBuyTransactionRepository {
    fn list_by_sold_out(&self, sold_out: bool) -> Result<Vec<MutualFundBuyTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = mutual_fund_buy_transactions::table
            .filter(mutual_fund_buy_transactions::is_sold_out.eq(sold_out))
            .select(MutualFundBuyTransactionRow::as_select())
            .load::<MutualFundBuyTransactionRow>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(MutualFundBuyTransaction::from)
            .collect())
    }

    async fn insert(
        &self,
        transaction: NewMutualFundBuyTransaction,
        policy: CreatePolicy,
    ) -> Result<MutualFundBuyTransaction> {
        let new_row = NewMutualFundBuyTransactionRow::from_new(transaction, &policy)?;
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(mutual_fund_buy_transactions::table)
                    .values(&new_row)
                    .returning(MutualFundBuyTransactionRow::as_returning())
                    .get_result::<MutualFundBuyTransactionRow>(conn)
                    .into_core()?;
                Ok(MutualFundBuyTransaction::from(row))
            })
            .await
    }
}

pub struct MutualFundSellTransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MutualFundSellTransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MutualFundSellTransactionRepositoryTrait for MutualFundSellTransactionRepository {
    fn list_all(&self) -> Result<Vec<MutualFundSellTransaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = mutual_fund_sell_transactions::table
            .select(MutualFundSellTransactionRow::as_select())
            .load::<MutualFundSellTransactionRow>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(MutualFundSellTransaction::from)
            .collect())
    }

    async fn insert(
        &self,
        transaction: NewMutualFundSellTransaction,
        policy: CreatePolicy,
    ) -> Result<MutualFundSellTransaction> {
        let new_row = NewMutualFundSellTransactionRow::from_new(transaction, &policy)?;
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(mutual_fund_sell_transactions::table)
                    .values(&new_row)
                    .returning(MutualFundSellTransactionRow::as_returning())
                    .get_result::<MutualFundSellTransactionRow>(conn)
                    .into_core()?;
                Ok(MutualFundSellTransaction::from(row))
            })
            .await
    }
}
