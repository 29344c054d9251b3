use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::candidate::NewCandidate,
    error::Error,
    model::{
        api::{
            AdminLoginRequest, AliasDto, AliasPairDto, BulkAliasDto, BulkAliasRequest,
            CreateAliasRequest, CreateCandidateRequest, DeleteCandidateRequest, ErrorDto, OkDto,
            ResetRequest, SeedTokensDto, SeedTokensRequest, SetVotingStatusRequest, UploadDto,
            UploadRequest, VotingStatusDto,
        },
        app::AppState,
    },
    service::{
        admin::{require_admin, AdminService},
        alias::AliasService,
        candidate::CandidateService,
        token::TokenService,
        upload::UploadService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Verify the admin password
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = OkDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Seed a numbered range of canonical voter tokens
#[utoipa::path(
    post,
    path = "/api/admin/token-seed",
    tag = ADMIN_TAG,
    request_body = SeedTokensRequest,
    responses(
        (status = 200, description = "Tokens seeded", body = SeedTokensDto),
        (status = 400, description = "Invalid seed range", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_tokens(
    State(state): State<AppState>,
    Json(request): Json<SeedTokensRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let created = TokenService::new(&state.db)
        .seed_range(&request.prefix, request.start, request.end)
        .await?;

    Ok((StatusCode::OK, Json(SeedTokensDto { ok: true, created })))
}

/// Create an alias for a canonical voter token
#[utoipa::path(
    post,
    path = "/api/admin/token-alias",
    tag = ADMIN_TAG,
    request_body = CreateAliasRequest,
    responses(
        (status = 200, description = "Alias created", body = AliasDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 404, description = "Canonical token not found", body = ErrorDto),
        (status = 409, description = "Alias already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_alias(
    State(state): State<AppState>,
    Json(request): Json<CreateAliasRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let alias = AliasService::new(&state.db)
        .create_alias(&request.canonical_token, request.alias_token.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(AliasDto {
            ok: true,
            alias_token: alias,
        }),
    ))
}

/// Generate aliases for every seeded token without one
#[utoipa::path(
    post,
    path = "/api/admin/bulk-token-alias",
    tag = ADMIN_TAG,
    request_body = BulkAliasRequest,
    responses(
        (status = 200, description = "Aliases generated", body = BulkAliasDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_aliases(
    State(state): State<AppState>,
    Json(request): Json<BulkAliasRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let created = AliasService::new(&state.db).bulk_create().await?;

    Ok((
        StatusCode::OK,
        Json(BulkAliasDto {
            ok: true,
            created: created
                .into_iter()
                .map(|(canonical, alias)| AliasPairDto { canonical, alias })
                .collect(),
        }),
    ))
}

/// Add a candidate to the ballot
#[utoipa::path(
    post,
    path = "/api/admin/candidates",
    tag = ADMIN_TAG,
    request_body = CreateCandidateRequest,
    responses(
        (status = 200, description = "Candidate created", body = OkDto),
        (status = 400, description = "Invalid candidate", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let profile = NewCandidate {
        name: String::new(),
        category: String::new(),
        age: request.age,
        height: request.height,
        major: request.major,
        year: request.year,
        hobbies: request.hobbies,
        hometown: request.hometown,
    };

    CandidateService::new(&state.db)
        .create(&request.name, request.category, &request.images, profile)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Remove a candidate from the ballot
#[utoipa::path(
    delete,
    path = "/api/admin/candidates/{id}",
    tag = ADMIN_TAG,
    params(("id" = String, Path, description = "Candidate id")),
    request_body = DeleteCandidateRequest,
    responses(
        (status = 200, description = "Candidate deleted", body = OkDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<DeleteCandidateRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let removed = CandidateService::new(&state.db).delete(&id).await?;
    if !removed {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto::new("Candidate not found.")),
        )
            .into_response());
    }

    Ok((StatusCode::OK, Json(OkDto::new())).into_response())
}

/// Change the voting status
#[utoipa::path(
    post,
    path = "/api/admin/voting-status",
    tag = ADMIN_TAG,
    request_body = SetVotingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = VotingStatusDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_voting_status(
    State(state): State<AppState>,
    Json(request): Json<SetVotingStatusRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    AdminService::new(&state.db).set_voting_status(request.status).await?;

    Ok((
        StatusCode::OK,
        Json(VotingStatusDto {
            ok: true,
            status: request.status,
        }),
    ))
}

/// Reset all election state
#[utoipa::path(
    post,
    path = "/api/admin/reset",
    tag = ADMIN_TAG,
    request_body = ResetRequest,
    responses(
        (status = 200, description = "Election state reset", body = OkDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    AdminService::new(&state.db).reset_all().await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Upload a candidate image as a base64 data URL
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = ADMIN_TAG,
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state.config, &request.password)?;

    let stored = UploadService::new(&state.config)
        .store_image(&request.data_url, &request.file_name, &request.prefix)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UploadDto {
            ok: true,
            url: stored.url,
            path: stored.path,
        }),
    ))
}
