use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_airport::Airport;

static IDX_CONNECTION_DESTINATION_ID: &str = "idx-connection-destination_id";
static FK_CONNECTION_ORIGIN_ID: &str = "fk-connection-origin_id";
static FK_CONNECTION_DESTINATION_ID: &str = "fk-connection-destination_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(integer(Connection::OriginId))
                    .col(integer(Connection::DestinationId))
                    .col(integer(Connection::DistanceKm))
                    .col(integer(Connection::DurationMinutes))
                    .primary_key(
                        Index::create()
                            .col(Connection::OriginId)
                            .col(Connection::DestinationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONNECTION_ORIGIN_ID)
                            .from(Connection::Table, Connection::OriginId)
                            .to(Airport::Table, Airport::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONNECTION_DESTINATION_ID)
                            .from(Connection::Table, Connection::DestinationId)
                            .to(Airport::Table, Airport::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONNECTION_DESTINATION_ID)
                    .table(Connection::Table)
                    .col(Connection::DestinationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONNECTION_DESTINATION_ID)
                    .table(Connection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Connection {
    Table,
    OriginId,
    DestinationId,
    DistanceKm,
    DurationMinutes,
}
