use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Audit log: no foreign key to candidate, entries must survive
        // candidate deletion.
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(string(Vote::Token))
                    .col(string(Vote::RawToken))
                    .col(string(Vote::CandidateId))
                    .col(string(Vote::Category))
                    .col(timestamp(Vote::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    Token,
    RawToken,
    CandidateId,
    Category,
    CreatedAt,
}
