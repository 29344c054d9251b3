use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::Config,
    data::{CandidateRepository, VoteLogRepository, VoterTokenRepository, VotingConfigRepository},
    error::{admin::AdminError, Error},
    model::election::VotingStatus,
};

/// Verifies the submitted admin password against the configured one.
///
/// A deployment without a configured password rejects every admin request
/// rather than falling open.
pub fn require_admin(config: &Config, password: &str) -> Result<(), Error> {
    let configured = config
        .admin_password
        .as_deref()
        .ok_or(AdminError::PasswordNotConfigured)?;

    if password != configured {
        return Err(AdminError::Unauthorized.into());
    }

    Ok(())
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn voting_status(&self) -> Result<VotingStatus, Error> {
        Ok(VotingConfigRepository::new(self.db).status().await?)
    }

    pub async fn set_voting_status(&self, status: VotingStatus) -> Result<(), Error> {
        VotingConfigRepository::new(self.db).set_status(status).await?;

        tracing::info!(status = %status, "Voting status changed");

        Ok(())
    }

    /// Resets the election: zeroes every tally, restores every token to
    /// unused, and clears the audit log, all in one transaction.
    ///
    /// Seeded tokens, aliases, and candidate profiles survive the reset.
    pub async fn reset_all(&self) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let candidates = CandidateRepository::new(&txn).reset_votes().await?;
        let tokens = VoterTokenRepository::new(&txn).reset_all().await?;
        let entries = VoteLogRepository::new(&txn).clear().await?;

        txn.commit().await?;

        tracing::info!(candidates, tokens, entries, "Election state reset");

        Ok(())
    }
}
