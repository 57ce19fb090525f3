use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_aircraft::Aircraft;

static IDX_AIRCRAFT_OWNERSHIP_COMPANY_ID: &str = "idx-aircraft_ownership-company_id";
static FK_AIRCRAFT_OWNERSHIP_AIRCRAFT_ID: &str = "fk-aircraft_ownership-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftOwnership::Table)
                    .if_not_exists()
                    .col(integer(AircraftOwnership::AircraftId))
                    .col(integer(AircraftOwnership::CompanyId))
                    .col(string(AircraftOwnership::Registration))
                    .col(date_null(AircraftOwnership::AcquiredOn))
                    .primary_key(
                        Index::create()
                            .col(AircraftOwnership::AircraftId)
                            .col(AircraftOwnership::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AIRCRAFT_OWNERSHIP_AIRCRAFT_ID)
                            .from(AircraftOwnership::Table, AircraftOwnership::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_OWNERSHIP_COMPANY_ID)
                    .table(AircraftOwnership::Table)
                    .col(AircraftOwnership::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_OWNERSHIP_COMPANY_ID)
                    .table(AircraftOwnership::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AircraftOwnership::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AircraftOwnership {
    Table,
    AircraftId,
    CompanyId,
    Registration,
    AcquiredOn,
}
