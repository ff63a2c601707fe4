//! Route groups, one module per resource family, nested under `/investment`.

mod accounts;
mod miscellaneous;
mod mutual_funds;
mod stocks;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/investment",
            Router::new()
                .merge(accounts::router())
                .merge(miscellaneous::router())
                .merge(mutual_funds::router())
                .merge(stocks::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
