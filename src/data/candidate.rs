use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

/// Profile fields for a new candidate; the id and vote count are assigned by
/// the caller and the database respectively.
pub struct NewCandidate {
    pub name: String,
    pub category: String,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub hobbies: Option<String>,
    pub hometown: Option<String>,
}

pub struct CandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidateRepository<'a, C> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find_by_id(id).one(self.db).await
    }

    /// All candidates with their display images in position order.
    pub async fn list_with_images(
        &self,
    ) -> Result<Vec<(entity::candidate::Model, Vec<entity::candidate_image::Model>)>, DbErr> {
        entity::prelude::Candidate::find()
            .find_with_related(entity::prelude::CandidateImage)
            .order_by_asc(entity::candidate::Column::CreatedAt)
            .order_by_asc(entity::candidate_image::Column::Position)
            .all(self.db)
            .await
    }

    /// Inserts a candidate and its ordered images. Callers needing the two
    /// inserts to be atomic should pass a transaction as the connection.
    pub async fn create(
        &self,
        id: &str,
        new: NewCandidate,
        images: &[String],
        created_at: NaiveDateTime,
    ) -> Result<entity::candidate::Model, DbErr> {
        let candidate = entity::candidate::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            name: ActiveValue::Set(new.name),
            category: ActiveValue::Set(new.category),
            votes: ActiveValue::Set(0),
            age: ActiveValue::Set(new.age),
            height: ActiveValue::Set(new.height),
            major: ActiveValue::Set(new.major),
            year: ActiveValue::Set(new.year),
            hobbies: ActiveValue::Set(new.hobbies),
            hometown: ActiveValue::Set(new.hometown),
            created_at: ActiveValue::Set(created_at),
        };
        let candidate = candidate.insert(self.db).await?;

        for (position, url) in images.iter().enumerate() {
            let image = entity::candidate_image::ActiveModel {
                candidate_id: ActiveValue::Set(candidate.id.clone()),
                position: ActiveValue::Set(position as i32),
                url: ActiveValue::Set(url.clone()),
                ..Default::default()
            };
            image.insert(self.db).await?;
        }

        Ok(candidate)
    }

    /// Deletes a candidate; its images cascade.
    ///
    /// Returns OK regardless of the candidate existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Candidate::delete_by_id(id).exec(self.db).await
    }

    /// Atomically adds one vote to the candidate's tally.
    pub async fn increment_votes(&self, id: &str) -> Result<u64, DbErr> {
        use entity::candidate::Column;

        let result = entity::prelude::Candidate::update_many()
            .col_expr(Column::Votes, Expr::col(Column::Votes).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Zeroes every candidate's vote tally.
    pub async fn reset_votes(&self) -> Result<u64, DbErr> {
        use entity::candidate::Column;

        let result = entity::prelude::Candidate::update_many()
            .col_expr(Column::Votes, Expr::value(0i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
