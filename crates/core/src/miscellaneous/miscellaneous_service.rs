use log::debug;
use std::sync::Arc;

use super::miscellaneous_model::{Miscellaneous, NewMiscellaneous};
use super::miscellaneous_traits::{MiscellaneousRepositoryTrait, MiscellaneousServiceTrait};
use crate::errors::Result;
use crate::mapping::{CreatePolicy, CREATE_POLICY};

/// Service for miscellaneous investments.
pub struct MiscellaneousService {
    repository: Arc<dyn MiscellaneousRepositoryTrait>,
    policy: CreatePolicy,
}

impl MiscellaneousService {
    pub fn new(repository: Arc<dyn MiscellaneousRepositoryTrait>) -> Self {
        Self {
            repository,
            policy: CREATE_POLICY,
        }
    }
}

#[async_trait::async_trait]
impl MiscellaneousServiceTrait for MiscellaneousService {
    fn get_accounts(&self) -> Result<Vec<Miscellaneous>> {
        debug!("Fetching active miscellaneous investments");
        self.repository.list_active()
    }

    async fn add_account(&self, investment: NewMiscellaneous) -> Result<Miscellaneous> {
        debug!("Adding a miscellaneous investment");
        self.repository
            .insert(investment, self.policy.clone())
            .await
    }
}
