use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use investments_core::mutual_funds::{
    MutualFund, MutualFundBuyTransaction, MutualFundSellTransaction, NewMutualFund,
    NewMutualFundBuyTransaction, NewMutualFundSellTransaction,
};

async fn get_mutual_funds(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MutualFund>>> {
    let funds = state.mutual_fund_service.get_mutual_funds()?;
    Ok(Json(funds))
}

async fn add_mutual_fund(
    State(state): State<Arc<AppState>>,
    Json(fund): Json<NewMutualFund>,
) -> ApiResult<Json<MutualFund>> {
    let created = state.mutual_fund_service.add_mutual_fund(fund).await?;
    Ok(Json(created))
}

/// The public read is fixed to open positions; sold-out rows stay queryable
/// through the service but are not exposed here.
async fn get_buy_transactions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MutualFundBuyTransaction>>> {
    let transactions = state.mutual_fund_service.get_buy_transactions(false)?;
    Ok(Json(transactions))
}

async fn add_buy_transaction(
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<NewMutualFundBuyTransaction>,
) -> ApiResult<Json<MutualFundBuyTransaction>> {
    let created = state
        .mutual_fund_service
        .add_buy_transaction(transaction)
        .await?;
    Ok(Json(created))
}

async fn get_sell_transactions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MutualFundSellTransaction>>> {
    let transactions = state.mutual_fund_service.get_sell_transactions()?;
    Ok(Json(transactions))
}

async fn add_sell_transaction(
    State(state): State<Arc<AppState>>,
    Json(transaction): Json<NewMutualFundSellTransaction>,
) -> ApiResult<Json<MutualFundSellTransaction>> {
    let created = state
        .mutual_fund_service
        .add_sell_transaction(transaction)
        .await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mutualfunds", get(get_mutual_funds).post(add_mutual_fund))
        .route(
            "/mutualfunds/transactions/buy",
            get(get_buy_transactions).post(add_buy_transaction),
        )
        .route(
            "/mutualfunds/transactions/sell",
            get(get_sell_transactions).post(add_sell_transaction),
        )
}
