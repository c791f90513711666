// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Services are the only layer that constructs these; route handlers just
//! propagate with `?` and the `IntoResponse` impl writes the flat
//! `{"error": message}` body the API contract requires.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Empty filtered list outcome: not a failure, but still carried through
    /// the error channel so services stay uniform. Responds 200 with an
    /// explanatory message. The "no workouts at all" case is `NotFound`
    /// instead; that asymmetry is part of the API contract.
    #[error("{0}")]
    EmptyResult(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::EmptyResult(msg) => (StatusCode::OK, msg),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                // Untyped/unexpected errors default to 400; no internals leak.
                (
                    StatusCode::BAD_REQUEST,
                    "Une erreur est survenue.".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::BAD_REQUEST,
                    "Une erreur est survenue.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
