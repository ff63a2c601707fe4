use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use investments_core::stocks::{NewStock, Stock};

async fn get_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.stock_service.get_stocks()?;
    Ok(Json(stocks))
}

async fn add_stock(
    State(state): State<Arc<AppState>>,
    Json(stock): Json<NewStock>,
) -> ApiResult<Json<Stock>> {
    let created = state.stock_service.add_stock(stock).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stocks", get(get_stocks).post(add_stock))
}
