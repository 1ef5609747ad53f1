use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

#[derive(Deserialize)]
struct ConfirmationPayload {
    email: String,
    code: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/send-confirmation", post(send_confirmation))
}

async fn send_confirmation(
    State(app_state): State<AppState>,
    Json(payload): Json<ConfirmationPayload>,
) -> AppResult<impl IntoResponse> {
    app_state
        .confirmation_use_cases
        .send_code(&payload.email, &payload.code)
        .await?;
    Ok(Json(MessageResponse {
        message: "Confirmation code sent!",
    }))
}
