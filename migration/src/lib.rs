pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_voter_token_table;
mod m20260301_000002_create_token_alias_table;
mod m20260301_000003_create_candidate_table;
mod m20260301_000004_create_candidate_image_table;
mod m20260301_000005_create_vote_table;
mod m20260301_000006_create_voting_config_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_voter_token_table::Migration),
            Box::new(m20260301_000002_create_token_alias_table::Migration),
            Box::new(m20260301_000003_create_candidate_table::Migration),
            Box::new(m20260301_000004_create_candidate_image_table::Migration),
            Box::new(m20260301_000005_create_vote_table::Migration),
            Box::new(m20260301_000006_create_voting_config_table::Migration),
        ]
    }
}
