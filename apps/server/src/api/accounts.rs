use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use investments_core::accounts::{Account, NewAccount};

async fn get_deposit_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.deposit_account_service.get_accounts()?;
    Ok(Json(accounts))
}

async fn add_deposit_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    let created = state.deposit_account_service.add_account(account).await?;
    Ok(Json(created))
}

async fn get_loan_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.loan_service.get_accounts()?;
    Ok(Json(accounts))
}

async fn add_loan_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    let created = state.loan_service.add_account(account).await?;
    Ok(Json(created))
}

async fn get_saving_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.saving_account_service.get_accounts()?;
    Ok(Json(accounts))
}

async fn add_saving_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    let created = state.saving_account_service.add_account(account).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/depositaccounts",
            get(get_deposit_accounts).post(add_deposit_account),
        )
        .route("/loanaccounts", get(get_loan_accounts).post(add_loan_account))
        .route(
            "/savingaccounts",
            get(get_saving_accounts).post(add_saving_account),
        )
}
