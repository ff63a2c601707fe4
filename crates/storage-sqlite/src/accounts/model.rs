//! Database models for the three account tables.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use investments_core::accounts::{Account, NewAccount};
use investments_core::mapping::CreatePolicy;
use investments_core::Result;

use crate::utils::parse_decimal_column;

macro_rules! account_rows {
    ($table:ident, $row:ident, $new_row:ident) => {
        /// Database row for one account table.
        #[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
        #[diesel(table_name = crate::schema::$table)]
        #[diesel(check_for_backend(diesel::sqlite::Sqlite))]
        pub struct $row {
            pub id: i32,
            pub bank_name: String,
            pub branch: String,
            pub account_number: String,
            pub balance: String,
            pub created_at: NaiveDateTime,
            pub modified_at: NaiveDateTime,
            pub active: bool,
        }

        /// Insertable row. The id and audit columns are absent on purpose;
        /// the create policy must skip them and the database fills them in.
        #[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $new_row {
            pub bank_name: String,
            pub branch: String,
            pub account_number: String,
            pub balance: String,
            pub active: bool,
        }

        impl $new_row {
            pub fn from_new(account: NewAccount, policy: &CreatePolicy) -> Result<Self> {
                policy.require_skip("id")?;
                policy.require_skip("created_at")?;
                policy.require_skip("modified_at")?;
                Ok(Self {
                    bank_name: account.bank_name,
                    branch: account.branch,
                    account_number: account.account_number,
                    balance: account.balance.to_string(),
                    active: policy.forced_bool("active")?,
                })
            }
        }

        impl From<$row> for Account {
            fn from(row: $row) -> Self {
                Self {
                    id: row.id,
                    bank_name: row.bank_name,
                    branch: row.branch,
                    account_number: row.account_number,
                    balance: parse_decimal_column(&row.balance, "balance"),
                }
            }
        }
    };
}

account_rows!(deposit_accounts, DepositAccountRow, NewDepositAccountRow);
account_rows!(loans, LoanRow, NewLoanRow);
account_rows!(saving_accounts, SavingAccountRow, NewSavingAccountRow);

#[cfg(test)]
mod tests {
    use super::*;
    use investments_core::mapping::{CreatePolicy as Policy, FieldRule, CREATE_POLICY};
    use rust_decimal_macros::dec;

    fn new_account() -> NewAccount {
        NewAccount {
            id: Some(999),
            bank_name: "First Bank".to_string(),
            branch: "Downtown".to_string(),
            account_number: "ACC-001".to_string(),
            balance: dec!(1250.50),
        }
    }

    #[test]
    fn insertable_row_applies_the_create_policy() {
        let row = NewDepositAccountRow::from_new(new_account(), &CREATE_POLICY).unwrap();
        // Client id is discarded (the struct has no id column) and the row
        // comes out active.
        assert!(row.active);
        assert_eq!(row.balance, "1250.50");
    }

    #[test]
    fn policy_without_audit_skip_is_rejected() {
        const BROKEN: Policy = Policy::new(
            &[("id", FieldRule::Skip), ("active", FieldRule::Force(true))],
            false,
        );
        assert!(NewLoanRow::from_new(new_account(), &BROKEN).is_err());
    }

    #[test]
    fn row_to_wire_model_drops_lifecycle_columns() {
        let row = SavingAccountRow {
            id: 4,
            bank_name: "First Bank".to_string(),
            branch: "Downtown".to_string(),
            account_number: "ACC-001".to_string(),
            balance: "99.95".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            modified_at: chrono::Utc::now().naive_utc(),
            active: true,
        };
        let account = Account::from(row);
        assert_eq!(account.id, 4);
        assert_eq!(account.balance, dec!(99.95));
    }
}
