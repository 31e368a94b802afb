use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed because the email is unknown or the password does not match.
    ///
    /// Both cases share one variant so responses never reveal which emails exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration failed because another account already uses the email.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email already registered")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 Unauthorized
/// - `EmailTaken` → 409 Conflict
///
/// Failures are logged at debug level; the client message is the error's display text.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication rejected: {}", self);

        let status = match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
