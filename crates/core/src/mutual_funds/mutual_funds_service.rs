use log::debug;
use std::sync::Arc;

use super::mutual_funds_model::{
    MutualFund, MutualFundBuyTransaction, MutualFundSellTransaction, NewMutualFund,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};
use super::mutual_funds_traits::{
    MutualFundBuyTransactionRepositoryTrait, MutualFundRepositoryTrait,
    MutualFundSellTransactionRepositoryTrait, MutualFundServiceTrait,
};
use crate::errors::Result;
use crate::mapping::{
    CreatePolicy, BUY_TRANSACTION_CREATE_POLICY, CREATE_POLICY, SELL_TRANSACTION_CREATE_POLICY,
};

/// Service for mutual funds and their transactions.
pub struct MutualFundService {
    funds: Arc<dyn MutualFundRepositoryTrait>,
    buys: Arc<dyn MutualFundBuyTransactionRepositoryTrait>,
    sells: Arc<dyn MutualFundSellTransactionRepositoryTrait>,
    policy: CreatePolicy,
    buy_policy: CreatePolicy,
    sell_policy: CreatePolicy,
}

impl MutualFundService {
    pub fn new(
        funds: Arc<dyn MutualFundRepositoryTrait>,
        buys: Arc<dyn MutualFundBuyTransactionRepositoryTrait>,
        sells: Arc<dyn MutualFundSellTransactionRepositoryTrait>,
    ) -> Self {
        Self {
            funds,
            buys,
            sells,
            policy: CREATE_POLICY,
            buy_policy: BUY_TRANSACTION_CREATE_POLICY,
            sell_policy: SELL_TRANSACTION_CREATE_POLICY,
        }
    }
}

#[async_trait::async_trait]
impl MutualFundServiceTrait for MutualFundService {
    fn get_mutual_funds(&self) -> Result<Vec<MutualFund>> {
        debug!("Fetching active mutual funds");
        self.funds.list_active()
    }

    async fn add_mutual_fund(&self, fund: NewMutualFund) -> Result<MutualFund> {
        debug!("Adding a mutual fund");
        self.funds.insert(fund, self.policy.clone()).await
    }

    /// Lists buy transactions by sold-out status. The HTTP layer requests
    /// `false` (open positions); the query accepts either value.
    fn get_buy_transactions(&self, is_sold_out: bool) -> Result<Vec<MutualFundBuyTransaction>> {
        debug!("Fetching buy transactions with is_sold_out = {is_sold_out}");
        self.buys.list_by_sold_out(is_sold_out)
    }

    async fn add_buy_transaction(
        &self,
        transaction: NewMutualFundBuyTransaction,
    ) -> Result<MutualFundBuyTransaction> {
        debug!("Adding a mutual fund buy transaction");
        self.buys
            .insert(transaction, self.buy_policy.clone())
            .await
    }

    fn get_sell_transactions(&self) -> Result<Vec<MutualFundSellTransaction>> {
        debug!("Fetching all sell transactions");
        self.sells.list_all()
    }

    async fn add_sell_transaction(
        &self,
        transaction: NewMutualFundSellTransaction,
    ) -> Result<MutualFundSellTransaction> {
        debug!("Adding a mutual fund sell transaction");
        self.sells
            .insert(transaction, self.sell_policy.clone())
            .await
    }
}
