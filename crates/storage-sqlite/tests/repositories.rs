//! Repository tests against a real on-disk SQLite database.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use investments_core::accounts::{AccountRepositoryTrait, NewAccount};
use investments_core::mapping::{
    BUY_TRANSACTION_CREATE_POLICY, CREATE_POLICY, SELL_TRANSACTION_CREATE_POLICY,
};
use investments_core::mutual_funds::{
    MutualFundBuyTransactionRepositoryTrait, MutualFundSellTransactionRepositoryTrait,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};
use investments_core::stocks::{NewStock, StockRepositoryTrait};
use investments_storage_sqlite::accounts::{DepositAccountRepository, SavingAccountRepository};
use investments_storage_sqlite::db::{create_pool, get_connection, run_migrations, spawn_writer};
use investments_storage_sqlite::mutual_funds::{
    MutualFundBuyTransactionRepository, MutualFundSellTransactionRepository,
};
use investments_storage_sqlite::stocks::StockRepository;
use investments_storage_sqlite::{DbPool, WriteHandle};

fn setup() -> (TempDir, Arc<DbPool>, WriteHandle) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("investments.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    (dir, pool, writer)
}

fn new_account(bank: &str) -> NewAccount {
    NewAccount {
        id: Some(999),
        bank_name: bank.to_string(),
        branch: "Downtown".to_string(),
        account_number: "ACC-001".to_string(),
        balance: dec!(1250.50),
    }
}

#[tokio::test]
async fn insert_assigns_server_id_and_ignores_client_id() {
    let (_dir, pool, writer) = setup();
    let repo = DepositAccountRepository::new(pool, writer);

    let created = repo
        .insert(new_account("First Bank"), CREATE_POLICY)
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.balance, dec!(1250.50));

    let listed = repo.list_active().unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn list_active_hides_deactivated_rows() {
    let (_dir, pool, writer) = setup();
    let repo = DepositAccountRepository::new(pool.clone(), writer);

    let first = repo
        .insert(new_account("First Bank"), CREATE_POLICY)
        .await
        .unwrap();
    let second = repo
        .insert(new_account("Second Bank"), CREATE_POLICY)
        .await
        .unwrap();

    // No endpoint flips the flag; emulate a soft delete directly.
    {
        use investments_storage_sqlite::schema::deposit_accounts::dsl::*;
        let mut conn = get_connection(&pool).unwrap();
        diesel::update(deposit_accounts.find(first.id))
            .set(active.eq(false))
            .execute(&mut conn)
            .unwrap();
    }

    let listed = repo.list_active().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);
}

#[tokio::test]
async fn stock_create_matches_wire_expectations() {
    let (_dir, pool, writer) = setup();
    let repo = StockRepository::new(pool, writer);

    let created = repo
        .insert(
            NewStock {
                id: None,
                stock_code: "IBM".to_string(),
                stock_name: "Intl Business Machines".to_string(),
                stock_exchange: "NYSE".to_string(),
                broker: "Acme".to_string(),
            },
            CREATE_POLICY,
        )
        .await
        .unwrap();

    assert!(created.id > 0);
    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["stockCode"], "IBM");
    assert!(json.get("active").is_none());
    assert!(json.get("createdAt").is_none());
    assert!(json.get("modifiedAt").is_none());
}

fn new_buy(is_sold_out: bool) -> NewMutualFundBuyTransaction {
    NewMutualFundBuyTransaction {
        id: None,
        mf_id: 3,
        nav: 25.5,
        units: 100.0,
        charge: 1.5,
        buy_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        sold_units: 0.0,
        is_sold_out,
    }
}

#[tokio::test]
async fn buy_transactions_partition_on_sold_out() {
    let (_dir, pool, writer) = setup();
    let repo = MutualFundBuyTransactionRepository::new(pool.clone(), writer);

    // Client claims sold out; the create policy stores it unsold.
    let first = repo
        .insert(new_buy(true), BUY_TRANSACTION_CREATE_POLICY)
        .await
        .unwrap();
    assert!(!first.is_sold_out);
    let second = repo
        .insert(new_buy(false), BUY_TRANSACTION_CREATE_POLICY)
        .await
        .unwrap();

    {
        use investments_storage_sqlite::schema::mutual_fund_buy_transactions::dsl::*;
        let mut conn = get_connection(&pool).unwrap();
        diesel::update(mutual_fund_buy_transactions.find(first.id))
            .set(is_sold_out.eq(true))
            .execute(&mut conn)
            .unwrap();
    }

    let open = repo.list_by_sold_out(false).unwrap();
    let closed = repo.list_by_sold_out(true).unwrap();
    assert_eq!(open.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second.id]);
    assert_eq!(closed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first.id]);
}

#[tokio::test]
async fn sell_transactions_round_trip_buy_ids_and_dates() {
    let (_dir, pool, writer) = setup();
    let repo = MutualFundSellTransactionRepository::new(pool, writer);

    let sold_date = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
    let created = repo
        .insert(
            NewMutualFundSellTransaction {
                id: None,
                mf_id: 3,
                buy_ids: vec![10, 11],
                nav: 30.0,
                units: 50.0,
                charge: 0.5,
                sold_date,
                profit_loss: 225.0,
            },
            SELL_TRANSACTION_CREATE_POLICY,
        )
        .await
        .unwrap();

    let listed = repo.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].buy_ids, vec![10, 11]);
    assert_eq!(listed[0].sold_date, sold_date);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let (_dir, pool, writer) = setup();
    let repo = Arc::new(SavingAccountRepository::new(pool, writer));

    let a = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.insert(new_account("Bank A"), CREATE_POLICY).await })
    };
    let b = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.insert(new_account("Bank B"), CREATE_POLICY).await })
    };

    let first = a.await.unwrap().unwrap();
    let second = b.await.unwrap().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(repo.list_active().unwrap().len(), 2);
}
