use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

use crate::model::election::Category;

/// Append-only audit log of successful votes. Never read by the voting logic
/// itself; cleared in bulk only by the administrative reset.
pub struct VoteLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteLogRepository<'a, C> {
    /// Creates a new instance of [`VoteLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn append(
        &self,
        token: &str,
        raw_token: &str,
        candidate_id: &str,
        category: Category,
        created_at: NaiveDateTime,
    ) -> Result<entity::vote::Model, DbErr> {
        let model = entity::vote::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            raw_token: ActiveValue::Set(raw_token.to_string()),
            candidate_id: ActiveValue::Set(candidate_id.to_string()),
            category: ActiveValue::Set(category.as_str().to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Vote::find().count(self.db).await
    }

    pub async fn clear(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Vote::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
