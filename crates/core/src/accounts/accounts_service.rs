use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;
use crate::mapping::{CreatePolicy, CREATE_POLICY};

/// Service for one account resource. Instantiated three times at startup,
/// once per backing repository (deposits, loans, savings).
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    policy: CreatePolicy,
    /// Resource name used in log lines ("deposit", "loan", "saving").
    resource: &'static str,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>, resource: &'static str) -> Self {
        Self {
            repository,
            policy: CREATE_POLICY,
            resource,
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Lists the active accounts of this resource.
    fn get_accounts(&self) -> Result<Vec<Account>> {
        debug!("Fetching active {} accounts", self.resource);
        self.repository.list_active()
    }

    /// Creates an account, with server-owned columns governed by the create policy.
    async fn add_account(&self, account: NewAccount) -> Result<Account> {
        debug!("Adding a {} account", self.resource);
        self.repository.insert(account, self.policy.clone()).await
    }
}
