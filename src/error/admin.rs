use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid password.")]
    Unauthorized,
    #[error("Admin password is not configured.")]
    PasswordNotConfigured,
    #[error("Canonical token not found.")]
    CanonicalNotFound,
    #[error("Alias already exists.")]
    AliasCollision,
    #[error("Unable to generate alias token.")]
    AliasExhausted,
    #[error("Invalid prefix or range: {0}")]
    InvalidSeedRange(String),
    #[error("{0}")]
    InvalidUpload(String),
    #[error("{0}")]
    InvalidCandidate(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::CanonicalNotFound => StatusCode::NOT_FOUND,
            Self::AliasCollision => StatusCode::CONFLICT,
            // Exhaustion at 16 characters over a 62-symbol alphabet means the
            // alias store is misbehaving, not key-space pressure.
            Self::AliasExhausted | Self::PasswordNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidSeedRange(_) | Self::InvalidUpload(_) | Self::InvalidCandidate(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Admin request rejected: {}", self);
        }

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
