use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect,
};

pub struct TokenAliasRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenAliasRepository<'a, C> {
    /// Creates a new instance of [`TokenAliasRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, alias: &str) -> Result<Option<entity::token_alias::Model>, DbErr> {
        entity::prelude::TokenAlias::find_by_id(alias).one(self.db).await
    }

    pub async fn exists(&self, alias: &str) -> Result<bool, DbErr> {
        Ok(self.get(alias).await?.is_some())
    }

    pub async fn create(
        &self,
        alias: &str,
        canonical: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::token_alias::Model, DbErr> {
        let model = entity::token_alias::ActiveModel {
            alias: ActiveValue::Set(alias.to_string()),
            canonical: ActiveValue::Set(canonical.to_string()),
            created_at: ActiveValue::Set(created_at),
        };

        model.insert(self.db).await
    }

    /// Distinct canonical tokens that already have at least one alias.
    pub async fn aliased_canonicals(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::TokenAlias::find()
            .select_only()
            .column(entity::token_alias::Column::Canonical)
            .distinct()
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
