use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(string(Passenger::Name))
                    .col(string_len(Passenger::Cpf, 11))
                    .col(string(Passenger::Phone))
                    .col(string(Passenger::Email))
                    .col(date(Passenger::DateOfBirth))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Passenger {
    Table,
    Id,
    Name,
    Cpf,
    Phone,
    Email,
    DateOfBirth,
}
