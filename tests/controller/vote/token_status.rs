//! Tests for the token_status endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coronet::controller::vote::token_status;
use coronet::model::api::{TokenStatusDto, TokenStatusRequest};

use super::*;

fn request(token: &str) -> Json<TokenStatusRequest> {
    Json(TokenStatusRequest {
        token: token.to_string(),
    })
}

/// Expected: Ok with 200 OK and the stored usage flags
#[tokio::test]
async fn success_returns_usage_flags() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::insert_used_voter_token(&test.db, "PAOH0001", "k1", "q1").await?;

    let result = token_status(State(test.app_state()), request("PAOH0001")).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: TokenStatusDto = serde_json::from_slice(&bytes).unwrap();
    assert!(dto.ok);
    assert!(dto.used_king);
    assert!(dto.used_queen);
    assert_eq!(dto.last_king_candidate_id.as_deref(), Some("k1"));

    Ok(())
}

/// Expected: 200 OK with all flags clear through an alias
#[tokio::test]
async fn resolves_alias_to_canonical_record() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::insert_voter_token(&test.db, "PAOH0001").await?;
    fixtures::insert_alias(&test.db, "a1b2c3d4e5f6g7h8", "PAOH0001").await?;

    let result = token_status(State(test.app_state()), request("a1b2c3d4e5f6g7h8")).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: TokenStatusDto = serde_json::from_slice(&bytes).unwrap();
    assert!(!dto.used_king);
    assert!(!dto.used_queen);

    Ok(())
}

/// Expected: 404 Not Found for an unknown token
#[tokio::test]
async fn unknown_token_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = token_status(State(test.app_state()), request("missing")).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
