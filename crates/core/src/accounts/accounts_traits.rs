use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;
use crate::mapping::CreatePolicy;

/// Trait for account repository operations. Implemented once per backing
/// table (deposit accounts, loans, saving accounts).
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Loads all rows with the active flag set.
    fn list_active(&self) -> Result<Vec<Account>>;
    /// Persists a new row built from `account` under `policy` and returns it
    /// with the generated id.
    async fn insert(&self, account: NewAccount, policy: CreatePolicy) -> Result<Account>;
}

/// Trait for account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    fn get_accounts(&self) -> Result<Vec<Account>>;
    async fn add_account(&self, account: NewAccount) -> Result<Account>;
}
