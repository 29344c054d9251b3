//! Tests for the get_voting_status endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use coronet::controller::election::get_voting_status;
use coronet::model::{api::VotingStatusDto, election::VotingStatus};

use super::*;

/// Expected: 200 OK reading not-started before any admin action
#[tokio::test]
async fn defaults_to_not_started() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = get_voting_status(State(test.app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: VotingStatusDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(dto.status, VotingStatus::NotStarted);

    Ok(())
}

/// Expected: 200 OK reflecting the stored status
#[tokio::test]
async fn reflects_stored_status() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::set_voting_status(&test.db, "active").await?;

    let result = get_voting_status(State(test.app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: VotingStatusDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(dto.status, VotingStatus::Active);

    Ok(())
}
