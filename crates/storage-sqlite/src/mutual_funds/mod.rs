//! SQLite storage for mutual funds and their buy/sell transactions.

mod model;
mod repository;

pub use model::{
    MutualFundBuyTransactionRow, MutualFundRow, MutualFundSellTransactionRow,
    NewMutualFundBuyTransactionRow, NewMutualFundRow, NewMutualFundSellTransactionRow,
};
pub use repository::{
    MutualFundBuyTransactionRepository, MutualFundRepository, MutualFundSellTransactionRepository,
};
