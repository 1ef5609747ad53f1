use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    domain::entities::booking::NewBooking,
};

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct BookingPayload {
    lecture_name: String,
    department: String,
    module: String,
    year: String,
    date: String,
    start_time: String,
    end_time: String,
    type_of_booking: String,
    location: String,
    booked_email: String,
}

impl From<BookingPayload> for NewBooking {
    fn from(p: BookingPayload) -> Self {
        NewBooking {
            lecture_name: p.lecture_name,
            department: p.department,
            module: p.module,
            year: p.year,
            date: p.date,
            start_time: p.start_time,
            end_time: p.end_time,
            type_of_booking: p.type_of_booking,
            location: p.location,
            booked_email: p.booked_email,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}

async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> AppResult<impl IntoResponse> {
    let booking = app_state.booking_use_cases.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_bookings(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bookings = app_state.booking_use_cases.list().await?;
    Ok(Json(bookings))
}
