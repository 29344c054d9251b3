//! Tests for the upload endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coronet::controller::admin::upload;
use coronet::model::api::{UploadDto, UploadRequest};

use super::*;

fn request(password: &str, data_url: &str) -> Json<UploadRequest> {
    Json(UploadRequest {
        password: password.to_string(),
        data_url: data_url.to_string(),
        file_name: "photo.png".to_string(),
        prefix: "candidates".to_string(),
    })
}

/// Expected: 200 OK with the image written under the storage root
#[tokio::test]
async fn success_stores_image() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;
    let state = test.app_state();
    let storage_root = state.config.storage_root.clone();

    let result = upload(
        State(state),
        request(TEST_ADMIN_PASSWORD, "data:image/png;base64,aGk="),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: UploadDto = serde_json::from_slice(&bytes).unwrap();
    assert!(dto.path.starts_with("candidates/"));
    assert!(dto.url.ends_with(&dto.path));

    let on_disk = storage_root.join(&dto.path);
    assert_eq!(std::fs::read(on_disk).unwrap(), b"hi");

    std::fs::remove_dir_all(&storage_root).ok();

    Ok(())
}

/// Expected: 400 Bad Request for a non-image payload
#[tokio::test]
async fn non_image_returns_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = upload(
        State(test.app_state()),
        request(TEST_ADMIN_PASSWORD, "data:text/html;base64,aGk="),
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

    let result = upload(
        State(test.app_state()),
        request("guess", "data:image/png;base64,aGk="),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
