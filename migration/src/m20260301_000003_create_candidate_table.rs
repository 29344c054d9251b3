use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(string(Candidate::Id).primary_key())
                    .col(string(Candidate::Name))
                    .col(string(Candidate::Category))
                    .col(big_integer(Candidate::Votes).default(0))
                    .col(integer_null(Candidate::Age))
                    .col(string_null(Candidate::Height))
                    .col(string_null(Candidate::Major))
                    .col(string_null(Candidate::Year))
                    .col(string_null(Candidate::Hobbies))
                    .col(string_null(Candidate::Hometown))
                    .col(timestamp(Candidate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    Name,
    Category,
    Votes,
    Age,
    Height,
    Major,
    Year,
    Hobbies,
    Hometown,
    CreatedAt,
}
