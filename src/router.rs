//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI serves interactive documentation at `/api/docs`. Uploaded
//! images are served back from the storage root under `/uploads`.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// `storage_root` is the directory uploaded images live in; it backs the
/// `/uploads` static mount.
pub fn routes(storage_root: &Path) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Coronet", description = "Coronet election API"), tags(
        (name = controller::vote::VOTE_TAG, description = "Voting API routes"),
        (name = controller::election::ELECTION_TAG, description = "Public election data routes"),
        (name = controller::admin::ADMIN_TAG, description = "Administrative API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::vote::cast_vote))
        .routes(routes!(controller::vote::token_status))
        .routes(routes!(controller::election::get_candidates))
        .routes(routes!(controller::election::get_voting_status))
        .routes(routes!(controller::admin::login))
        .routes(routes!(controller::admin::seed_tokens))
        .routes(routes!(controller::admin::create_alias))
        .routes(routes!(controller::admin::bulk_create_aliases))
        .routes(routes!(controller::admin::create_candidate))
        .routes(routes!(controller::admin::delete_candidate))
        .routes(routes!(controller::admin::set_voting_status))
        .routes(routes!(controller::admin::reset))
        .routes(routes!(controller::admin::upload))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/uploads", ServeDir::new(storage_root))
}
