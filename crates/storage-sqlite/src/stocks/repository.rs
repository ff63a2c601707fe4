use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use investments_core::mapping::CreatePolicy;
use investments_core::stocks::{NewStock, Stock, StockRepositoryTrait};
use investments_core::Result;

use super::model::{NewStockRow, StockRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::stocks;
use crate::schema::stocks::dsl::*;

pub struct StockRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StockRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    fn list_active(&self) -> Result<Vec<Stock>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stocks
            .filter(active.eq(true))
            .select(StockRow::as_select())
            .load::<StockRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Stock::from).collect())
    }

    async fn insert(&self, stock: NewStock, policy: CreatePolicy) -> Result<Stock> {
        let new_row = NewStockRow::from_new(stock, &policy)?;
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(stocks::table)
                    .values(&new_row)
                    .returning(StockRow::as_returning())
                    .get_result::<StockRow>(conn)
                    .into_core()?;
                Ok(Stock::from(row))
            })
            .await
    }
}
