use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, election::Category};

fn category_title(category: &Category) -> &'static str {
    match category {
        Category::King => "King",
        Category::Queen => "Queen",
    }
}

/// Failures of the vote transaction engine and token reads.
///
/// Each variant is a distinct precondition failure; none of them leave any
/// partial mutation behind.
#[derive(Error, Debug)]
pub enum VoteError {
    #[error("Invalid voter token.")]
    InvalidToken,
    #[error("{} vote already used.", category_title(.0))]
    AlreadyVoted(Category),
    #[error("Voting is not active.")]
    VotingClosed,
    #[error("Candidate not found.")]
    CandidateNotFound,
    #[error("Candidate category mismatch.")]
    CategoryMismatch,
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidToken | Self::CandidateNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyVoted(_) | Self::VotingClosed | Self::CategoryMismatch => {
                StatusCode::BAD_REQUEST
            }
        };

        tracing::debug!("Vote rejected: {}", self);

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
