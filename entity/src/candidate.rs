use sea_orm::entity::prelude::*;

/// Election candidate with a per-category vote tally.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "candidate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub votes: i64,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub hobbies: Option<String>,
    pub hometown: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::candidate_image::Entity")]
    CandidateImage,
}

impl Related<super::candidate_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CandidateImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
