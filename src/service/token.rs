use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    data::{TokenAliasRepository, VoterTokenRepository},
    error::{admin::AdminError, vote::VoteError, Error},
};

/// Tokens are written in batches bounded by the store's write limits.
const SEED_BATCH_SIZE: usize = 500;

/// Resolves a raw token to its canonical voter token.
///
/// Two-tier lookup: an alias record with a non-empty canonical value wins;
/// otherwise a raw token that exists in the voter token store is itself
/// canonical. This lets the same voting link work whether it encodes a
/// human-readable id or an opaque alias.
///
/// Free function over `ConnectionTrait` so the vote transaction can resolve
/// inside its own transactional scope.
pub async fn resolve_canonical<C: ConnectionTrait>(
    db: &C,
    raw_token: &str,
) -> Result<String, Error> {
    let alias_repo = TokenAliasRepository::new(db);

    if let Some(alias) = alias_repo.get(raw_token).await? {
        let canonical = alias.canonical.trim();
        if !canonical.is_empty() {
            return Ok(canonical.to_string());
        }
    }

    let token_repo = VoterTokenRepository::new(db);
    if token_repo.get(raw_token).await?.is_some() {
        return Ok(raw_token.to_string());
    }

    Err(VoteError::InvalidToken.into())
}

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    /// Creates a new instance of [`TokenService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn resolve_canonical(&self, raw_token: &str) -> Result<String, Error> {
        resolve_canonical(self.db, raw_token).await
    }

    /// Current usage flags and last-chosen candidates for a raw token.
    ///
    /// Pure read; never mutates state. The client uses this to restore
    /// "already voted" UI from the server-authoritative record.
    pub async fn token_status(&self, raw_token: &str) -> Result<entity::voter_token::Model, Error> {
        let canonical = self.resolve_canonical(raw_token).await?;

        VoterTokenRepository::new(self.db)
            .get(&canonical)
            .await?
            .ok_or_else(|| VoteError::InvalidToken.into())
    }

    /// Seeds canonical tokens `{prefix}{n}` for `n` in `[start, end]`,
    /// zero-padded to the width of `end`.
    ///
    /// Re-running is safe: existing tokens keep their usage state. The
    /// returned count reflects the number of ids processed, not newly
    /// inserted rows.
    pub async fn seed_range(&self, prefix: &str, start: i64, end: i64) -> Result<u64, Error> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(AdminError::InvalidSeedRange("prefix is required.".to_string()).into());
        }
        if start < 1 || end < start {
            return Err(AdminError::InvalidSeedRange(format!(
                "start must be >= 1 and end >= start, got {}..{}",
                start, end
            ))
            .into());
        }

        let width = end.to_string().len();
        let tokens: Vec<String> = (start..=end)
            .map(|n| format!("{}{:0width$}", prefix, n, width = width))
            .collect();

        let repo = VoterTokenRepository::new(self.db);
        for batch in tokens.chunks(SEED_BATCH_SIZE) {
            repo.seed_batch(batch).await?;
        }

        tracing::info!(prefix = %prefix, start, end, count = tokens.len(), "Seeded voter tokens");

        Ok(tokens.len() as u64)
    }
}
