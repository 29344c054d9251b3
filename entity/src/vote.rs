use sea_orm::entity::prelude::*;

/// Append-only vote audit record.
///
/// Carries both the canonical token and the raw token the voter submitted so
/// alias usage can be traced. Never read by the voting logic itself and
/// intentionally has no foreign key to `candidate`, entries outlive
/// candidate deletion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub token: String,
    pub raw_token: String,
    pub candidate_id: String,
    pub category: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
