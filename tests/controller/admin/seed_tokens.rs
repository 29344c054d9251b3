//! Tests for the seed_tokens endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coronet::controller::admin::seed_tokens;
use coronet::data::VoterTokenRepository;
use coronet::model::api::{SeedTokensDto, SeedTokensRequest};

use super::*;

fn request(password: &str, prefix: &str, start: i64, end: i64) -> Json<SeedTokensRequest> {
    Json(SeedTokensRequest {
        password: password.to_string(),
        prefix: prefix.to_string(),
        start,
        end,
    })
}

/// Expected: 200 OK with padded tokens persisted
#[tokio::test]
async fn success_seeds_padded_tokens() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = seed_tokens(
        State(test.app_state()),
        request(TEST_ADMIN_PASSWORD, "PAOH", 1, 10),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: SeedTokensDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(dto.created, 10);

    let repo = VoterTokenRepository::new(&test.db);
    assert!(repo.get("PAOH01").await?.is_some());
    assert!(repo.get("PAOH10").await?.is_some());

    Ok(())
}

/// Expected: 400 Bad Request for an inverted range
#[tokio::test]
async fn invalid_range_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = seed_tokens(
        State(test.app_state()),
        request(TEST_ADMIN_PASSWORD, "PAOH", 5, 1),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 401 Unauthorized without the admin password
#[tokio::test]
async fn wrong_password_returns_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = seed_tokens(State(test.app_state()), request("guess", "PAOH", 1, 10)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
