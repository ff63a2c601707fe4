use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use investments_core::mapping::CreatePolicy;
use investments_core::miscellaneous::{
    Miscellaneous, MiscellaneousRepositoryTrait, NewMiscellaneous,
};
use investments_core::Result;

use super::model::{MiscellaneousRow, NewMiscellaneousRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::miscellaneous;
use crate::schema::miscellaneous::dsl::*;

pub struct MiscellaneousRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MiscellaneousRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MiscellaneousRepositoryTrait for MiscellaneousRepository {
    fn list_active(&self) -> Result<Vec<Miscellaneous>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = miscellaneous
            .filter(active.eq(true))
            .select(MiscellaneousRow::as_select())
            .load::<MiscellaneousRow>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Miscellaneous::from).collect())
    }

    async fn insert(
        &self,
        investment: NewMiscellaneous,
        policy: CreatePolicy,
    ) -> Result<Miscellaneous> {
        let new_row = NewMiscellaneousRow::from_new(investment, &policy)?;
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(miscellaneous::table)
                    .values(&new_row)
                    .returning(MiscellaneousRow::as_returning())
                    .get_result::<MiscellaneousRow>(conn)
                    .into_core()?;
                Ok(Miscellaneous::from(row))
            })
            .await
    }
}
