use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{CandidateRepository, VoteLogRepository, VoterTokenRepository, VotingConfigRepository},
    error::{vote::VoteError, Error},
    model::election::{Category, VotingStatus},
    service::token::resolve_canonical,
};

/// The vote transaction engine.
///
/// All checks and mutations for one vote run inside a single database
/// transaction so concurrent requests for the same token and category
/// resolve to exactly one success. The conditional used-flag update in
/// [`VoterTokenRepository::mark_used`] is the arbiter: the loser of a race
/// sees zero rows affected and the whole transaction rolls back.
pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    /// Creates a new instance of [`VoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Casts a vote for `candidate_id` in `category` on behalf of the voter
    /// identified by `raw_token`.
    ///
    /// Preconditions, each a distinct failure:
    /// 1. voting status must be `active` (read inside the transaction, so a
    ///    status change racing a vote is never seen torn);
    /// 2. the raw token must resolve to a canonical voter token;
    /// 3. the category's used-flag must be false;
    /// 4. the candidate must exist and belong to the requested category.
    ///
    /// On success the candidate tally increased by exactly one, the token's
    /// category flag and last-chosen pointer are set, and an audit entry
    /// referencing both the canonical and raw token exists. On any failure
    /// the transaction rolls back with no partial mutation.
    pub async fn cast_vote(
        &self,
        raw_token: &str,
        candidate_id: &str,
        category: Category,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let status = VotingConfigRepository::new(&txn).status().await?;
        if status != VotingStatus::Active {
            return Err(VoteError::VotingClosed.into());
        }

        let canonical = resolve_canonical(&txn, raw_token).await?;

        let token_repo = VoterTokenRepository::new(&txn);
        let token = token_repo
            .get(&canonical)
            .await?
            .ok_or(VoteError::InvalidToken)?;

        let already_used = match category {
            Category::King => token.used_king,
            Category::Queen => token.used_queen,
        };
        if already_used {
            return Err(VoteError::AlreadyVoted(category).into());
        }

        let candidate_repo = CandidateRepository::new(&txn);
        let candidate = candidate_repo
            .get(candidate_id)
            .await?
            .ok_or(VoteError::CandidateNotFound)?;
        if candidate.category != category.as_str() {
            return Err(VoteError::CategoryMismatch.into());
        }

        let now = Utc::now().naive_utc();

        // Exactly-once guard: a concurrent vote that won the race leaves
        // nothing for this update to match.
        let rows = token_repo
            .mark_used(&canonical, category, candidate_id, now)
            .await?;
        if rows == 0 {
            return Err(VoteError::AlreadyVoted(category).into());
        }

        candidate_repo.increment_votes(candidate_id).await?;

        VoteLogRepository::new(&txn)
            .append(&canonical, raw_token, candidate_id, category, now)
            .await?;

        txn.commit().await?;

        tracing::info!(
            token = %canonical,
            candidate_id = %candidate_id,
            category = %category,
            "Vote recorded"
        );

        Ok(())
    }
}
