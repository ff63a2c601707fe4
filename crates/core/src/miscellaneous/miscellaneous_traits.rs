use async_trait::async_trait;

use super::miscellaneous_model::{Miscellaneous, NewMiscellaneous};
use crate::errors::Result;
use crate::mapping::CreatePolicy;

#[async_trait]
pub trait MiscellaneousRepositoryTrait: Send + Sync {
    fn list_active(&self) -> Result<Vec<Miscellaneous>>;
    async fn insert(
        &self,
        investment: NewMiscellaneous,
        policy: CreatePolicy,
    ) -> Result<Miscellaneous>;
}

#[async_trait]
pub trait MiscellaneousServiceTrait: Send + Sync {
    fn get_accounts(&self) -> Result<Vec<Miscellaneous>>;
    async fn add_account(&self, investment: NewMiscellaneous) -> Result<Miscellaneous>;
}
