use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::election::Category;

pub struct VoterTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoterTokenRepository<'a, C> {
    /// Creates a new instance of [`VoterTokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, token: &str) -> Result<Option<entity::voter_token::Model>, DbErr> {
        entity::prelude::VoterToken::find_by_id(token).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::voter_token::Model>, DbErr> {
        entity::prelude::VoterToken::find().all(self.db).await
    }

    /// Inserts a batch of fresh tokens, leaving already-seeded tokens
    /// untouched so a re-seed never resets usage state.
    pub async fn seed_batch(&self, tokens: &[String]) -> Result<(), DbErr> {
        let models = tokens.iter().map(|token| entity::voter_token::ActiveModel {
            token: ActiveValue::Set(token.clone()),
            used_king: ActiveValue::Set(false),
            used_queen: ActiveValue::Set(false),
            last_king_candidate_id: ActiveValue::Set(None),
            last_queen_candidate_id: ActiveValue::Set(None),
            used_at_king: ActiveValue::Set(None),
            used_at_queen: ActiveValue::Set(None),
        });

        entity::prelude::VoterToken::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::voter_token::Column::Token)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Conditionally marks the category flag used, recording the chosen
    /// candidate and the use timestamp.
    ///
    /// The update is filtered on the flag still being false; the returned
    /// rows-affected count is the exactly-once guard. Zero rows means a
    /// concurrent request (or an earlier one) already used this category.
    pub async fn mark_used(
        &self,
        token: &str,
        category: Category,
        candidate_id: &str,
        used_at: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        use entity::voter_token::Column;

        let (used_col, last_col, used_at_col) = match category {
            Category::King => (Column::UsedKing, Column::LastKingCandidateId, Column::UsedAtKing),
            Category::Queen => (
                Column::UsedQueen,
                Column::LastQueenCandidateId,
                Column::UsedAtQueen,
            ),
        };

        let result = entity::prelude::VoterToken::update_many()
            .col_expr(used_col, Expr::value(true))
            .col_expr(last_col, Expr::value(candidate_id.to_string()))
            .col_expr(used_at_col, Expr::value(used_at))
            .filter(Column::Token.eq(token))
            .filter(used_col.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clears usage flags, choice pointers, and use timestamps on every token.
    pub async fn reset_all(&self) -> Result<u64, DbErr> {
        use entity::voter_token::Column;

        let result = entity::prelude::VoterToken::update_many()
            .col_expr(Column::UsedKing, Expr::value(false))
            .col_expr(Column::UsedQueen, Expr::value(false))
            .col_expr(Column::LastKingCandidateId, Expr::value(Option::<String>::None))
            .col_expr(Column::LastQueenCandidateId, Expr::value(Option::<String>::None))
            .col_expr(Column::UsedAtKing, Expr::value(Option::<NaiveDateTime>::None))
            .col_expr(Column::UsedAtQueen, Expr::value(Option::<NaiveDateTime>::None))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
