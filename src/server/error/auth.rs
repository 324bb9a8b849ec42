use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential was presented on a route using the strict policy.
    #[error("Request did not carry a credential")]
    MissingCredentials,

    /// Unknown email or wrong password. Both cases share one client message so the response
    /// does not reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// Bearer credential was malformed, expired, badly signed, or names a user that no longer
    /// exists.
    #[error("Invalid credential: {0}")]
    InvalidToken(String),

    /// Password hashing or hash parsing failed.
    #[error("Failed to process password hash: {0}")]
    PasswordHash(String),

    /// Signing a new credential failed.
    #[error("Failed to issue credential: {0}")]
    TokenCreation(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` / `InvalidCredentials` / `InvalidToken` → 401 Unauthorized
/// - `DuplicateEmail` → 409 Conflict
/// - `PasswordHash` / `TokenCreation` → 500 Internal Server Error
///
/// Token failures are logged at debug level; the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected credential: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid or expired credentials".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::DuplicateEmail => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err @ (Self::PasswordHash(_) | Self::TokenCreation(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
