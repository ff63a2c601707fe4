use async_trait::async_trait;

use super::mutual_funds_model::{
    MutualFund, MutualFundBuyTransaction, MutualFundSellTransaction, NewMutualFund,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};
use crate::errors::Result;
use crate::mapping::CreatePolicy;

#[async_trait]
pub trait MutualFundRepositoryTrait: Send + Sync {
    fn list_active(&self) -> Result<Vec<MutualFund>>;
    async fn insert(&self, fund: NewMutualFund, policy: CreatePolicy) -> Result<MutualFund>;
}

/// Buy transactions have no active flag; reads filter on the sold-out column.
#[async_trait]
pub trait MutualFundBuyTransactionRepositoryTrait: Send + Sync {
    fn list_by_sold_out(&self, is_sold_out: bool) -> Result<Vec<MutualFundBuyTransaction>>;
    async fn insert(
        &self,
        transaction: NewMutualFundBuyTransaction,
        policy: CreatePolicy,
    ) -> Result<MutualFundBuyTransaction>;
}

/// Sell transactions are never filtered.
#[async_trait]
pub trait MutualFundSellTransactionRepositoryTrait: Send + Sync {
    fn list_all(&self) -> Result<Vec<MutualFundSellTransaction>>;
    async fn insert(
        &self,
        transaction: NewMutualFundSellTransaction,
        policy: CreatePolicy,
    ) -> Result<MutualFundSellTransaction>;
}

/// Trait for mutual fund service operations, covering funds and their
/// buy/sell transactions.
#[async_trait]
pub trait MutualFundServiceTrait: Send + Sync {
    fn get_mutual_funds(&self) -> Result<Vec<MutualFund>>;
    async fn add_mutual_fund(&self, fund: NewMutualFund) -> Result<MutualFund>;

    fn get_buy_transactions(&self, is_sold_out: bool) -> Result<Vec<MutualFundBuyTransaction>>;
    async fn add_buy_transaction(
        &self,
        transaction: NewMutualFundBuyTransaction,
    ) -> Result<MutualFundBuyTransaction>;

    fn get_sell_transactions(&self) -> Result<Vec<MutualFundSellTransaction>>;
    async fn add_sell_transaction(
        &self,
        transaction: NewMutualFundSellTransaction,
    ) -> Result<MutualFundSellTransaction>;
}
