//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into structured JSON responses. The `AppError` enum is the
//! top-level error type, implements `IntoResponse`, and serializes every failure
//! as `{status, error, message}` so the API never leaks a bare framework error.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all failure modes of the API and provides automatic conversion
/// to HTTP responses. `Validation`, `NotFound` and `Conflict` are raised
/// explicitly by the service layer with templated, entity-specific messages;
/// database constraint violations are recognized inside the `Db` variant and
/// surfaced as `IntegrityError`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign-key constraint violations become 400 responses with
    /// error name `IntegrityError` carrying the driver message; anything else
    /// becomes a 500 with the details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket setup or serve error.
    ///
    /// Only occurs during startup; results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or out-of-range input.
    ///
    /// Results in 400 Bad Request with error name `ValidationError` and the
    /// first violation message.
    #[error("{0}")]
    Validation(String),

    /// Referenced entity absent.
    ///
    /// Results in 404 Not Found with error name `NotFound`.
    #[error("{0}")]
    NotFound(String),

    /// Id collision on create, or another state conflict.
    ///
    /// Results in 400 Bad Request with error name `Conflict`.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned
    /// to the client.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Builds the standard error body for a response.
    fn body(status: StatusCode, error: &str, message: String) -> Response {
        (
            status,
            Json(ErrorDto {
                status: status.as_u16(),
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to its status code and error name. Database
/// constraint violations roll back the surrounding transaction before this
/// point (the transaction guard rolls back on drop), so only the translation
/// happens here. Internal errors are logged with full details but return a
/// generic message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - `Validation`, `Conflict`, integrity-violating `DbErr`
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => Self::body(StatusCode::BAD_REQUEST, "ValidationError", msg),
            Self::NotFound(msg) => Self::body(StatusCode::NOT_FOUND, "NotFound", msg),
            Self::Conflict(msg) => Self::body(StatusCode::BAD_REQUEST, "Conflict", msg),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg))
                | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                    Self::body(StatusCode::BAD_REQUEST, "IntegrityError", msg)
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::Internal(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client so implementation details never reach the caller. Used as the
/// fallback for errors without a specific HTTP mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        AppError::body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            "Internal server error".to_string(),
        )
    }
}
