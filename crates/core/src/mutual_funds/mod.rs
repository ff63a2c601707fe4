//! Mutual funds and their buy/sell transactions.

mod mutual_funds_model;
mod mutual_funds_service;
#[cfg(test)]
mod mutual_funds_service_tests;
mod mutual_funds_traits;

pub use mutual_funds_model::{
    MutualFund, MutualFundBuyTransaction, MutualFundSellTransaction, NewMutualFund,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};
pub use mutual_funds_service::MutualFundService;
pub use mutual_funds_traits::{
    MutualFundBuyTransactionRepositoryTrait, MutualFundRepositoryTrait,
    MutualFundSellTransactionRepositoryTrait, MutualFundServiceTrait,
};
