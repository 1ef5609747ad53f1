use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult, use_cases::account::NewAccount,
};

#[derive(Deserialize)]
struct RegisterPayload {
    name: String,
    email: String,
    password: String,
}

impl From<RegisterPayload> for NewAccount {
    fn from(p: RegisterPayload) -> Self {
        NewAccount {
            name: p.name,
            email: p.email,
            password: p.password,
        }
    }
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct LoginResponse {
    email: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Lectures", get(find_lecturers).post(register_lecturer))
        .route("/Students", get(find_students).post(register_student))
        .route("/login", post(login))
}

async fn register_lecturer(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    let lecturer = app_state
        .account_use_cases
        .register_lecturer(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(lecturer)))
}

async fn find_lecturers(
    State(app_state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let lecturers = app_state
        .account_use_cases
        .find_lecturers(query.email.as_deref())
        .await?;
    Ok(Json(lecturers))
}

async fn register_student(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    let student = app_state
        .account_use_cases
        .register_student(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn find_students(
    State(app_state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<impl IntoResponse> {
    let students = app_state
        .account_use_cases
        .find_students(query.email.as_deref())
        .await?;
    Ok(Json(students))
}

async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let email = app_state
        .account_use_cases
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(LoginResponse { email }))
}
