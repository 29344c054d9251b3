//! Tests for the cast_vote endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coronet::model::{api::VoteRequest, election::Category};
use coronet::{controller::vote::cast_vote, data::CandidateRepository};

use super::*;

async fn seed_election(test: &TestSetup) -> Result<(), TestError> {
    fixtures::set_voting_status(&test.db, "active").await?;
    fixtures::insert_voter_token(&test.db, "PAOH0001").await?;
    fixtures::insert_candidate(&test.db, "k1", "Aung", "king").await?;

    Ok(())
}

fn request(token: &str, candidate_id: &str, category: Category) -> Json<VoteRequest> {
    Json(VoteRequest {
        token: token.to_string(),
        candidate_id: candidate_id.to_string(),
        category,
    })
}

/// Expected: Ok with 200 OK response and an incremented tally
#[tokio::test]
async fn success_records_vote() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    seed_election(&test).await?;

    let result = cast_vote(
        State(test.app_state()),
        request("PAOH0001", "k1", Category::King),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let candidate = CandidateRepository::new(&test.db).get("k1").await?.unwrap();
    assert_eq!(candidate.votes, 1);

    Ok(())
}

/// Expected: 400 Bad Request for a second vote in the same category
#[tokio::test]
async fn repeat_vote_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    seed_election(&test).await?;

    let state = test.app_state();
    cast_vote(
        State(state.clone()),
        request("PAOH0001", "k1", Category::King),
    )
    .await
    .unwrap();

    let result = cast_vote(State(state), request("PAOH0001", "k1", Category::King)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 400 Bad Request while voting is not active
#[tokio::test]
async fn closed_voting_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::insert_voter_token(&test.db, "PAOH0001").await?;
    fixtures::insert_candidate(&test.db, "k1", "Aung", "king").await?;

    let result = cast_vote(
        State(test.app_state()),
        request("PAOH0001", "k1", Category::King),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 404 Not Found for an unknown voter token
#[tokio::test]
async fn unknown_token_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    seed_election(&test).await?;

    let result = cast_vote(
        State(test.app_state()),
        request("missing", "k1", Category::King),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 400 Bad Request when the candidate is in the other category
#[tokio::test]
async fn category_mismatch_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    seed_election(&test).await?;

    let result = cast_vote(
        State(test.app_state()),
        request("PAOH0001", "k1", Category::Queen),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
