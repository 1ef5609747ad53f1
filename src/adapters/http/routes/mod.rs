pub mod account;
pub mod booking;
pub mod confirmation;
pub mod room;

use axum::{Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(account::router())
        .merge(booking::router())
        .merge(room::router())
        .merge(confirmation::router())
}
