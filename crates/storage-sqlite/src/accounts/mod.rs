//! SQLite storage for deposit, loan, and saving accounts. Three tables share
//! one wire shape; each gets its own row types and repository.

mod model;
mod repository;

pub use model::{
    DepositAccountRow, LoanRow, NewDepositAccountRow, NewLoanRow, NewSavingAccountRow,
    SavingAccountRow,
};
pub use repository::{DepositAccountRepository, LoanRepository, SavingAccountRepository};
