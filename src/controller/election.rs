use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::{CandidateDto, ErrorDto, VotingStatusDto},
        app::AppState,
    },
    service::{admin::AdminService, candidate::CandidateService},
};

pub static ELECTION_TAG: &str = "election";

/// List all candidates with their images and vote tallies
#[utoipa::path(
    get,
    path = "/api/candidates",
    tag = ELECTION_TAG,
    responses(
        (status = 200, description = "All candidates", body = Vec<CandidateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_candidates(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let candidates = CandidateService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(candidates)))
}

/// Get the current voting status
#[utoipa::path(
    get,
    path = "/api/voting-status",
    tag = ELECTION_TAG,
    responses(
        (status = 200, description = "Current voting status", body = VotingStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_voting_status(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let status = AdminService::new(&state.db).voting_status().await?;

    Ok((StatusCode::OK, Json(VotingStatusDto { ok: true, status })))
}
