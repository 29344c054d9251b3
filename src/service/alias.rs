use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{TokenAliasRepository, VoterTokenRepository},
    error::{admin::AdminError, Error},
    util::random,
};

/// Alias length in characters, drawn from the 62-symbol alphabet.
const ALIAS_LENGTH: usize = 16;
/// Generation retries before signaling exhaustion. At this length repeated
/// exhaustion indicates a store outage, not key-space pressure.
const MAX_ALIAS_ATTEMPTS: usize = 5;

pub struct AliasService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AliasService<'a> {
    /// Creates a new instance of [`AliasService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws random aliases until one is unused, up to the attempt bound.
    ///
    /// Returns `Ok(None)` when every attempt collided; callers must treat
    /// that as a transient failure.
    pub async fn generate_unique_alias(&self) -> Result<Option<String>, Error> {
        let repo = TokenAliasRepository::new(self.db);

        for _ in 0..MAX_ALIAS_ATTEMPTS {
            let candidate = random::alphanumeric_token(ALIAS_LENGTH);
            if !repo.exists(&candidate).await? {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Creates an alias for a seeded canonical token.
    ///
    /// A requested alias must be unused; without one a fresh alias is
    /// generated server-side.
    pub async fn create_alias(
        &self,
        canonical_token: &str,
        requested: Option<&str>,
    ) -> Result<String, Error> {
        let canonical = canonical_token.trim();
        if canonical.is_empty() {
            return Err(AdminError::CanonicalNotFound.into());
        }

        let token_repo = VoterTokenRepository::new(self.db);
        if token_repo.get(canonical).await?.is_none() {
            return Err(AdminError::CanonicalNotFound.into());
        }

        let alias_repo = TokenAliasRepository::new(self.db);
        let requested = requested.map(str::trim).filter(|a| !a.is_empty());

        let alias = match requested {
            Some(alias) => {
                if alias_repo.exists(alias).await? {
                    return Err(AdminError::AliasCollision.into());
                }
                alias.to_string()
            }
            None => self
                .generate_unique_alias()
                .await?
                .ok_or(AdminError::AliasExhausted)?,
        };

        alias_repo.create(&alias, canonical, Utc::now().naive_utc()).await?;

        Ok(alias)
    }

    /// Generates one alias for every seeded canonical token that doesn't yet
    /// have one. Returns the created `(canonical, alias)` pairs.
    pub async fn bulk_create(&self) -> Result<Vec<(String, String)>, Error> {
        use std::collections::HashSet;

        let token_repo = VoterTokenRepository::new(self.db);
        let alias_repo = TokenAliasRepository::new(self.db);

        let aliased: HashSet<String> =
            alias_repo.aliased_canonicals().await?.into_iter().collect();

        let mut created = Vec::new();
        for token in token_repo.list().await? {
            if aliased.contains(&token.token) {
                continue;
            }

            let alias = self
                .generate_unique_alias()
                .await?
                .ok_or(AdminError::AliasExhausted)?;
            alias_repo.create(&alias, &token.token, Utc::now().naive_utc()).await?;
            created.push((token.token, alias));
        }

        tracing::info!(count = created.len(), "Generated alias tokens in bulk");

        Ok(created)
    }
}
