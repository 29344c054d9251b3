use std::path::{Path, PathBuf};

use base64::Engine;
use chrono::Utc;

use crate::{
    config::Config,
    error::{admin::AdminError, Error},
};

/// Splits a base64 data URL into its media type and decoded bytes.
///
/// Only `image/*` payloads are accepted.
fn parse_data_url(data_url: &str) -> Result<(String, Vec<u8>), AdminError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AdminError::InvalidUpload("expected a data URL.".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AdminError::InvalidUpload("malformed data URL.".to_string()))?;

    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| AdminError::InvalidUpload("expected base64 encoding.".to_string()))?;
    if !media_type.starts_with("image/") {
        return Err(AdminError::InvalidUpload(format!(
            "unsupported media type {media_type}."
        )));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| AdminError::InvalidUpload("invalid base64 payload.".to_string()))?;

    Ok((media_type.to_string(), bytes))
}

/// Replaces everything outside `[A-Za-z0-9._-]` in a file name.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Replaces everything outside `[A-Za-z0-9_-]` in a storage prefix.
///
/// Dots are excluded so a prefix can never climb out of the storage root.
fn sanitize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Stored image uploads, written under the configured storage root and
/// served back through the static file mount.
pub struct UploadService<'a> {
    config: &'a Config,
}

pub struct StoredUpload {
    /// Path relative to the storage root, e.g. `candidates/123_a.jpg`.
    pub path: String,
    /// Public URL the stored file is served from.
    pub url: String,
}

impl<'a> UploadService<'a> {
    /// Creates a new instance of [`UploadService`]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Decodes an image data URL and persists it under
    /// `{storage_root}/{prefix}/{timestamp}-{file_name}`.
    pub async fn store_image(
        &self,
        data_url: &str,
        file_name: &str,
        prefix: &str,
    ) -> Result<StoredUpload, Error> {
        let (media_type, bytes) = parse_data_url(data_url)?;

        let prefix = sanitize_prefix(prefix.trim());
        if prefix.is_empty() {
            return Err(AdminError::InvalidUpload("prefix is required.".to_string()).into());
        }

        let file_name = sanitize_file_name(file_name.trim());
        if file_name.is_empty() {
            return Err(AdminError::InvalidUpload("file name is required.".to_string()).into());
        }

        let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), file_name);
        let relative: PathBuf = Path::new(&prefix).join(&stored_name);

        let target = self.config.storage_root.join(&relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &bytes).await?;

        let path = format!("{}/{}", prefix, stored_name);
        let url = format!(
            "{}/uploads/{}",
            self.config.public_base_url.trim_end_matches('/'),
            path
        );

        tracing::info!(path = %path, media_type = %media_type, size = bytes.len(), "Stored upload");

        Ok(StoredUpload { path, url })
    }
}
