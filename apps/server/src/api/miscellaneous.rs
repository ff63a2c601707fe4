use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use investments_core::miscellaneous::{Miscellaneous, NewMiscellaneous};

async fn get_miscellaneous_accounts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Miscellaneous>>> {
    let investments = state.miscellaneous_service.get_accounts()?;
    Ok(Json(investments))
}

async fn add_miscellaneous_account(
    State(state): State<Arc<AppState>>,
    Json(investment): Json<NewMiscellaneous>,
) -> ApiResult<Json<Miscellaneous>> {
    let created = state.miscellaneous_service.add_account(investment).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/miscellaneousaccounts",
        get(get_miscellaneous_accounts).post(add_miscellaneous_account),
    )
}
