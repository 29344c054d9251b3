//! Tests for the create_candidate and delete_candidate endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use coronet::controller::admin::{create_candidate, delete_candidate};
use coronet::model::{
    api::{CreateCandidateRequest, DeleteCandidateRequest},
    election::Category,
};
use coronet::service::candidate::CandidateService;

use super::*;

fn create_request(name: &str, images: Vec<String>) -> Json<CreateCandidateRequest> {
    Json(CreateCandidateRequest {
        password: TEST_ADMIN_PASSWORD.to_string(),
        name: name.to_string(),
        category: Category::King,
        images,
        age: Some(20),
        height: None,
        major: Some("Physics".to_string()),
        year: None,
        hobbies: None,
        hometown: None,
    })
}

/// Expected: 200 OK with the candidate persisted
#[tokio::test]
async fn create_success() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = create_candidate(
        State(test.app_state()),
        create_request("Aung", vec!["https://example.com/1.jpg".to_string()]),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let candidates = CandidateService::new(&test.db).list().await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Aung");

    Ok(())
}

/// Expected: 400 Bad Request without any images
#[tokio::test]
async fn create_without_images_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = create_candidate(State(test.app_state()), create_request("Aung", vec![])).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 200 OK removing the candidate and its images
#[tokio::test]
async fn delete_success() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    fixtures::insert_candidate(&test.db, "k1", "Aung", "king").await?;

    let result = delete_candidate(
        State(test.app_state()),
        Path("k1".to_string()),
        Json(DeleteCandidateRequest {
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(CandidateService::new(&test.db).list().await.unwrap().is_empty());

    Ok(())
}

/// Expected: 404 Not Found for a candidate id that doesn't exist
#[tokio::test]
async fn delete_unknown_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = delete_candidate(
        State(test.app_state()),
        Path("missing".to_string()),
        Json(DeleteCandidateRequest {
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
