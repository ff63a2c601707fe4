use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use investments_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use investments_core::mapping::CreatePolicy;
use investments_core::Result;

use super::model::{
    DepositAccountRow, LoanRow, NewDepositAccountRow, NewLoanRow, NewSavingAccountRow,
    SavingAccountRow,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;

macro_rules! account_repository {
    ($repo:ident, $table:ident, $row:ident, $new_row:ident) => {
        pub struct $repo {
            pool: Arc<DbPool>,
            writer: WriteHandle,
        }

        impl $repo {
            pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
                Self { pool, writer }
            }
        }

        #[async_trait]
        impl AccountRepositoryTrait for $repo {
            fn list_active(&self) -> Result<Vec<Account>> {
                use crate::schema::$table::dsl::*;
                let mut conn = get_connection(&self.pool)?;
                let rows = $table
                    .filter(active.eq(true))
                    .select($row::as_select())
                    .load::<$row>(&mut conn)
                    .into_core()?;
                Ok(rows.into_iter().map(Account::from).collect())
            }

            async fn insert(&self, account: NewAccount, policy: CreatePolicy) -> Result<Account> {
                let new_row = $new_row::from_new(account, &policy)?;
                self.writer
                    .exec(move |conn| {
                        let row = diesel::insert_into(crate::schema::$table::table)
                            .values(&new_row)
                            .returning($row::as_returning())
                            .get_result::<$row>(conn)
                            .into_core()?;
                        Ok(Account::from(row))
                    })
                    .await
            }
        }
    };
}

account_repository!(
    DepositAccountRepository,
    deposit_accounts,
    DepositAccountRow,
    NewDepositAccountRow
);
account_repository!(LoanRepository, loans, LoanRow, NewLoanRow);
account_repository!(
    SavingAccountRepository,
    saving_accounts,
    SavingAccountRow,
    NewSavingAccountRow
);
