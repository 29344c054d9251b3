//! Request and response DTOs for the HTTP API.
//!
//! All bodies are camelCase JSON. Failures use [`ErrorDto`] with
//! `{ok: false, reason}`; successes carry `ok: true` plus operation data.

use serde::{Deserialize, Serialize};

use crate::model::election::{Category, VotingStatus};

/// The response when an error occurs with an API request.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub ok: bool,
    /// Human-readable failure reason.
    pub reason: String,
}

impl ErrorDto {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: reason.into(),
        }
    }
}

/// Bare success acknowledgement.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OkDto {
    pub ok: bool,
}

impl OkDto {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkDto {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// Raw voter token: either a canonical id or an opaque alias.
    pub token: String,
    pub candidate_id: String,
    pub category: Category,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenStatusRequest {
    pub token: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatusDto {
    pub ok: bool,
    pub used_king: bool,
    pub used_queen: bool,
    pub last_king_candidate_id: Option<String>,
    pub last_queen_candidate_id: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeedTokensRequest {
    pub password: String,
    pub prefix: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeedTokensDto {
    pub ok: bool,
    /// Number of ids processed; re-seeded ids count as well.
    pub created: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAliasRequest {
    pub password: String,
    pub canonical_token: String,
    /// Requested alias value; generated server-side when omitted.
    pub alias_token: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AliasDto {
    pub ok: bool,
    pub alias_token: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkAliasRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AliasPairDto {
    pub canonical: String,
    pub alias: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkAliasDto {
    pub ok: bool,
    pub created: Vec<AliasPairDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetVotingStatusRequest {
    pub password: String,
    pub status: VotingStatus,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VotingStatusDto {
    pub ok: bool,
    pub status: VotingStatus,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResetRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub password: String,
    /// Base64 data URL (`data:image/...;base64,...`).
    pub data_url: String,
    pub file_name: String,
    /// Storage path prefix, e.g. `candidates`.
    pub prefix: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadDto {
    pub ok: bool,
    pub url: String,
    pub path: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCandidateRequest {
    pub password: String,
    pub name: String,
    pub category: Category,
    /// Ordered display image URLs, 1 to 3.
    pub images: Vec<String>,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub hobbies: Option<String>,
    pub hometown: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteCandidateRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CandidateDto {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub images: Vec<String>,
    pub votes: i64,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub hobbies: Option<String>,
    pub hometown: Option<String>,
}
