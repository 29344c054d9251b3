//! Tests for the admin login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use coronet::controller::admin::login;
use coronet::model::api::AdminLoginRequest;

use super::*;

/// Expected: 200 OK for the configured password
#[tokio::test]
async fn success_with_configured_password() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = login(
        State(test.app_state()),
        Json(AdminLoginRequest {
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: 401 Unauthorized for a wrong password
#[tokio::test]
async fn wrong_password_returns_unauthorized() -> Result<(), TestError> {
    let test = test_setup_with_vote_tables!()?;

    let result = login(
        State(test.app_state()),
        Json(AdminLoginRequest {
            password: "guess".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
