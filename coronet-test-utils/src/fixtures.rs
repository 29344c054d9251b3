//! Test fixture helpers for inserting election records.
//!
//! Async insert helpers that seed voter tokens, aliases, candidates, and the
//! voting status row directly through entity active models, bypassing the
//! application's service layer so tests can arrange arbitrary states.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::error::TestError;

/// Insert a fresh (unused) voter token.
pub async fn insert_voter_token<C: ConnectionTrait>(
    db: &C,
    token: &str,
) -> Result<entity::voter_token::Model, TestError> {
    let model = entity::voter_token::ActiveModel {
        token: ActiveValue::Set(token.to_string()),
        used_king: ActiveValue::Set(false),
        used_queen: ActiveValue::Set(false),
        last_king_candidate_id: ActiveValue::Set(None),
        last_queen_candidate_id: ActiveValue::Set(None),
        used_at_king: ActiveValue::Set(None),
        used_at_queen: ActiveValue::Set(None),
    };

    Ok(model.insert(db).await?)
}

/// Insert a voter token with both categories already used.
pub async fn insert_used_voter_token<C: ConnectionTrait>(
    db: &C,
    token: &str,
    king_candidate_id: &str,
    queen_candidate_id: &str,
) -> Result<entity::voter_token::Model, TestError> {
    let now = Utc::now().naive_utc();
    let model = entity::voter_token::ActiveModel {
        token: ActiveValue::Set(token.to_string()),
        used_king: ActiveValue::Set(true),
        used_queen: ActiveValue::Set(true),
        last_king_candidate_id: ActiveValue::Set(Some(king_candidate_id.to_string())),
        last_queen_candidate_id: ActiveValue::Set(Some(queen_candidate_id.to_string())),
        used_at_king: ActiveValue::Set(Some(now)),
        used_at_queen: ActiveValue::Set(Some(now)),
    };

    Ok(model.insert(db).await?)
}

/// Insert an alias pointing at a canonical token.
pub async fn insert_alias<C: ConnectionTrait>(
    db: &C,
    alias: &str,
    canonical: &str,
) -> Result<entity::token_alias::Model, TestError> {
    let model = entity::token_alias::ActiveModel {
        alias: ActiveValue::Set(alias.to_string()),
        canonical: ActiveValue::Set(canonical.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(model.insert(db).await?)
}

/// Insert a candidate with zero votes and a single placeholder image.
pub async fn insert_candidate<C: ConnectionTrait>(
    db: &C,
    id: &str,
    name: &str,
    category: &str,
) -> Result<entity::candidate::Model, TestError> {
    let candidate = entity::candidate::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        name: ActiveValue::Set(name.to_string()),
        category: ActiveValue::Set(category.to_string()),
        votes: ActiveValue::Set(0),
        age: ActiveValue::Set(None),
        height: ActiveValue::Set(None),
        major: ActiveValue::Set(None),
        year: ActiveValue::Set(None),
        hobbies: ActiveValue::Set(None),
        hometown: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };
    let candidate = candidate.insert(db).await?;

    let image = entity::candidate_image::ActiveModel {
        candidate_id: ActiveValue::Set(candidate.id.clone()),
        position: ActiveValue::Set(0),
        url: ActiveValue::Set(format!("https://example.com/{}.jpg", id)),
        ..Default::default()
    };
    image.insert(db).await?;

    Ok(candidate)
}

/// Set the singleton voting status row.
pub async fn set_voting_status<C: ConnectionTrait>(db: &C, status: &str) -> Result<(), TestError> {
    use sea_orm::sea_query::OnConflict;
    use sea_orm::EntityTrait;

    let model = entity::voting_config::ActiveModel {
        id: ActiveValue::Set(1),
        status: ActiveValue::Set(status.to_string()),
    };

    entity::prelude::VotingConfig::insert(model)
        .on_conflict(
            OnConflict::column(entity::voting_config::Column::Id)
                .update_column(entity::voting_config::Column::Status)
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}
