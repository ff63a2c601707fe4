use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use investments_core::accounts::{AccountService, AccountServiceTrait};
use investments_core::miscellaneous::{MiscellaneousService, MiscellaneousServiceTrait};
use investments_core::mutual_funds::{MutualFundService, MutualFundServiceTrait};
use investments_core::stocks::{StockService, StockServiceTrait};
use investments_storage_sqlite::accounts::{
    DepositAccountRepository, LoanRepository, SavingAccountRepository,
};
use investments_storage_sqlite::db::{self, spawn_writer};
use investments_storage_sqlite::miscellaneous::MiscellaneousRepository;
use investments_storage_sqlite::mutual_funds::{
    MutualFundBuyTransactionRepository, MutualFundRepository,
    MutualFundSellTransactionRepository,
};
use investments_storage_sqlite::stocks::StockRepository;

/// Shared application state: one stateless service per resource, all backed
/// by the same pool and writer handle.
pub struct AppState {
    pub deposit_account_service: Arc<dyn AccountServiceTrait>,
    pub loan_service: Arc<dyn AccountServiceTrait>,
    pub saving_account_service: Arc<dyn AccountServiceTrait>,
    pub miscellaneous_service: Arc<dyn MiscellaneousServiceTrait>,
    pub mutual_fund_service: Arc<dyn MutualFundServiceTrait>,
    pub stock_service: Arc<dyn StockServiceTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Wires pool, writer actor, repositories, and services by hand. No framework
/// container; construction order is the dependency order.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let deposit_repo = Arc::new(DepositAccountRepository::new(pool.clone(), writer.clone()));
    let loan_repo = Arc::new(LoanRepository::new(pool.clone(), writer.clone()));
    let saving_repo = Arc::new(SavingAccountRepository::new(pool.clone(), writer.clone()));
    let miscellaneous_repo = Arc::new(MiscellaneousRepository::new(pool.clone(), writer.clone()));
    let fund_repo = Arc::new(MutualFundRepository::new(pool.clone(), writer.clone()));
    let buy_repo = Arc::new(MutualFundBuyTransactionRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let sell_repo = Arc::new(MutualFundSellTransactionRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let stock_repo = Arc::new(StockRepository::new(pool.clone(), writer.clone()));

    Ok(Arc::new(AppState {
        deposit_account_service: Arc::new(AccountService::new(deposit_repo, "deposit")),
        loan_service: Arc::new(AccountService::new(loan_repo, "loan")),
        saving_account_service: Arc::new(AccountService::new(saving_repo, "saving")),
        miscellaneous_service: Arc::new(MiscellaneousService::new(miscellaneous_repo)),
        mutual_fund_service: Arc::new(MutualFundService::new(fund_repo, buy_repo, sell_repo)),
        stock_service: Arc::new(StockService::new(stock_repo)),
    }))
}
