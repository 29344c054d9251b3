use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::election::VotingStatus;

/// Singleton row id for the voting configuration record.
const CONFIG_ID: i32 = 1;

pub struct VotingConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VotingConfigRepository<'a, C> {
    /// Creates a new instance of [`VotingConfigRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Current voting status; a missing row reads as `NotStarted`.
    pub async fn status(&self) -> Result<VotingStatus, DbErr> {
        let config = entity::prelude::VotingConfig::find_by_id(CONFIG_ID)
            .one(self.db)
            .await?;

        Ok(config
            .map(|c| VotingStatus::from_db(&c.status))
            .unwrap_or(VotingStatus::NotStarted))
    }

    pub async fn set_status(&self, status: VotingStatus) -> Result<(), DbErr> {
        let model = entity::voting_config::ActiveModel {
            id: ActiveValue::Set(CONFIG_ID),
            status: ActiveValue::Set(status.as_str().to_string()),
        };

        entity::prelude::VotingConfig::insert(model)
            .on_conflict(
                OnConflict::column(entity::voting_config::Column::Id)
                    .update_column(entity::voting_config::Column::Status)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
