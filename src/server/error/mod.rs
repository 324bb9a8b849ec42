//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps the
//! domain-specific errors and implements `IntoResponse`, mapping each kind to a status code
//! and an `ErrorDto` body. Persistence, session and internal failures are logged server-side
//! and reach the client only as a generic message.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, mapped by `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected state inside the application. Always 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM. Always 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error. Always 500.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Malformed input or incomplete checkout state. 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Authenticated but not the owner of the referenced entity. 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity does not exist. 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with existing data. 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with a message for the server log only.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Whether a checkout step should recover from this error by sending the customer back
    /// to the step with a flash message instead of failing the request.
    pub fn is_recoverable_input(&self) -> bool {
        matches!(self, Self::BadRequest(_) | Self::NotFound(_))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The wrapped error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
