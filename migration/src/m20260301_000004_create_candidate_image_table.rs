use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000003_create_candidate_table::Candidate;

static FK_CANDIDATE_IMAGE_CANDIDATE_ID: &str = "fk_candidate_image_candidate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CandidateImage::Table)
                    .if_not_exists()
                    .col(pk_auto(CandidateImage::Id))
                    .col(string(CandidateImage::CandidateId))
                    .col(integer(CandidateImage::Position))
                    .col(string(CandidateImage::Url))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_IMAGE_CANDIDATE_ID)
                    .from_tbl(CandidateImage::Table)
                    .from_col(CandidateImage::CandidateId)
                    .to_tbl(Candidate::Table)
                    .to_col(Candidate::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CANDIDATE_IMAGE_CANDIDATE_ID)
                    .table(CandidateImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CandidateImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CandidateImage {
    Table,
    Id,
    CandidateId,
    Position,
    Url,
}
