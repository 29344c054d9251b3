//! Error types for the Coronet server application.
//!
//! Per-domain error enums (voting, administration, configuration) built on
//! `thiserror`, aggregated into a unified [`Error`] type. All errors
//! implement `IntoResponse`, mapping to the API's `{ok: false, reason}`
//! failure shape with the appropriate HTTP status class.

pub mod admin;
pub mod config;
pub mod vote;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{admin::AdminError, config::ConfigError, vote::VoteError},
    model::api::ErrorDto,
};

/// Main error type for the Coronet server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, with `#[from]` conversions so handlers
/// and services can propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Vote precondition or token resolution failure.
    #[error(transparent)]
    VoteError(#[from] VoteError),
    /// Administrative operation failure (auth, alias, seeding, upload).
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error while storing or reading uploaded images.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::VoteError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic reason to the
/// client so internal details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
