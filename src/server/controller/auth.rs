use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{LoginDto, RegisterUserDto},
    server::{
        error::AppError,
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/register - Create an account
///
/// # Returns
/// - `201 Created`: JSON UserDto
/// - `400 Bad Request`: Unparseable body, empty name, invalid email, or short password
/// - `409 Conflict`: Email already registered
/// - `500 Internal Server Error`: Store error
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let auth_service = AuthService::new(&state.store);

    let user = auth_service
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Check an email/password pair
///
/// # Returns
/// - `200 OK`: JSON UserDto
/// - `400 Bad Request`: Unparseable body
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `500 Internal Server Error`: Store error or unreadable stored digest
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let auth_service = AuthService::new(&state.store);

    let user = auth_service.login(LoginParam::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
