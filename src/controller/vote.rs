use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, OkDto, TokenStatusDto, TokenStatusRequest, VoteRequest},
        app::AppState,
    },
    service::{token::TokenService, vote::VoteService},
};

pub static VOTE_TAG: &str = "vote";

/// Cast a vote for a candidate using a voter token
#[utoipa::path(
    post,
    path = "/api/vote",
    tag = VOTE_TAG,
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = OkDto),
        (status = 400, description = "Vote rejected", body = ErrorDto),
        (status = 404, description = "Unknown token or candidate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Result<impl IntoResponse, Error> {
    VoteService::new(&state.db)
        .cast_vote(&request.token, &request.candidate_id, request.category)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Get the usage status of a voter token
#[utoipa::path(
    post,
    path = "/api/token-status",
    tag = VOTE_TAG,
    request_body = TokenStatusRequest,
    responses(
        (status = 200, description = "Current token usage flags", body = TokenStatusDto),
        (status = 404, description = "Unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn token_status(
    State(state): State<AppState>,
    Json(request): Json<TokenStatusRequest>,
) -> Result<impl IntoResponse, Error> {
    let token = TokenService::new(&state.db).token_status(&request.token).await?;

    Ok((
        StatusCode::OK,
        Json(TokenStatusDto {
            ok: true,
            used_king: token.used_king,
            used_queen: token.used_queen,
            last_king_candidate_id: token.last_king_candidate_id,
            last_queen_candidate_id: token.last_queen_candidate_id,
        }),
    ))
}
