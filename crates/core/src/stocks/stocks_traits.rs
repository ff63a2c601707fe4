use async_trait::async_trait;

use super::stocks_model::{NewStock, Stock};
use crate::errors::Result;
use crate::mapping::CreatePolicy;

#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    fn list_active(&self) -> Result<Vec<Stock>>;
    async fn insert(&self, stock: NewStock, policy: CreatePolicy) -> Result<Stock>;
}

#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    fn get_stocks(&self) -> Result<Vec<Stock>>;
    async fn add_stock(&self, stock: NewStock) -> Result<Stock>;
}
