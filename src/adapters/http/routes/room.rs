use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Deserialize;

use crate::{adapters::http::app_state::AppState, app_error::AppResult, use_cases::room::NewRoom};

#[derive(Deserialize)]
struct RoomPayload {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    capacity: i32,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/rooms", get(list_rooms).post(create_room))
}

async fn create_room(
    State(app_state): State<AppState>,
    Json(payload): Json<RoomPayload>,
) -> AppResult<impl IntoResponse> {
    let room = app_state
        .room_use_cases
        .create(NewRoom {
            name: payload.name,
            location: payload.location,
            capacity: payload.capacity,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn list_rooms(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rooms = app_state.room_use_cases.list().await?;
    Ok(Json(rooms))
}
