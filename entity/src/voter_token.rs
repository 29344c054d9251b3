use sea_orm::entity::prelude::*;

/// Canonical voter token owning per-category eligibility state.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "voter_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub token: String,
    pub used_king: bool,
    pub used_queen: bool,
    pub last_king_candidate_id: Option<String>,
    pub last_queen_candidate_id: Option<String>,
    pub used_at_king: Option<DateTime>,
    pub used_at_queen: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
