//! Deposit, loan, and saving accounts share one wire shape and one service;
//! only the backing table differs per repository implementation.

mod accounts_model;
mod accounts_service;
mod accounts_traits;

pub use accounts_model::{Account, NewAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
