use log::debug;
use std::sync::Arc;

use super::stocks_model::{NewStock, Stock};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::errors::Result;
use crate::mapping::{CreatePolicy, CREATE_POLICY};

/// Service for stock holdings.
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
    policy: CreatePolicy,
}

impl StockService {
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self {
            repository,
            policy: CREATE_POLICY,
        }
    }
}

#[async_trait::async_trait]
impl StockServiceTrait for StockService {
    fn get_stocks(&self) -> Result<Vec<Stock>> {
        debug!("Fetching active stocks");
        self.repository.list_active()
    }

    async fn add_stock(&self, stock: NewStock) -> Result<Stock> {
        debug!("Adding a stock");
        self.repository.insert(stock, self.policy.clone()).await
    }
}
