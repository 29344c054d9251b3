use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoterToken::Table)
                    .if_not_exists()
                    .col(string(VoterToken::Token).primary_key())
                    .col(boolean(VoterToken::UsedKing).default(false))
                    .col(boolean(VoterToken::UsedQueen).default(false))
                    .col(string_null(VoterToken::LastKingCandidateId))
                    .col(string_null(VoterToken::LastQueenCandidateId))
                    .col(timestamp_null(VoterToken::UsedAtKing))
                    .col(timestamp_null(VoterToken::UsedAtQueen))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoterToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VoterToken {
    Table,
    Token,
    UsedKing,
    UsedQueen,
    LastKingCandidateId,
    LastQueenCandidateId,
    UsedAtKing,
    UsedAtQueen,
}
