//! Tests for the get_candidates endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use coronet::controller::election::get_candidates;
use coronet::model::api::CandidateDto;

use super::*;

/// Expected: Ok with 200 OK and every candidate with its images
#[tokio::test]
async fn success_lists_all_candidates() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::insert_candidate(&test.db, "k1", "Aung", "king").await?;
    fixtures::insert_candidate(&test.db, "q1", "Su", "queen").await?;

    let result = get_candidates(State(test.app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let candidates: Vec<CandidateDto> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.images.len() == 1));

    Ok(())
}

/// Expected: 200 OK with an empty list before any candidates exist
#[tokio::test]
async fn success_with_empty_roster() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = get_candidates(State(test.app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let candidates: Vec<CandidateDto> = serde_json::from_slice(&bytes).unwrap();
    assert!(candidates.is_empty());

    Ok(())
}
