//! Storage for flight connections, addressed by origin & destination.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::{
    model::connection::{ConnectionDto, UpdateConnectionDto},
    server::model::db::ConnectionModel,
};

/// Queries over the `connection` table
pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    /// Creates a new instance of [`ConnectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Condition matching exactly one connection by its origin & destination
    fn by_key(origin_id: i32, destination_id: i32) -> Condition {
        Condition::all()
            .add(entity::connection::Column::OriginId.eq(origin_id))
            .add(entity::connection::Column::DestinationId.eq(destination_id))
    }

    /// Get every connection
    pub async fn get_all(&self) -> Result<Vec<ConnectionModel>, DbErr> {
        entity::prelude::Connection::find().all(self.db).await
    }

    /// Insert a connection, both airports must exist
    pub async fn create(
        &self,
        connection: ConnectionDto,
    ) -> Result<ConnectionModel, DbErr> {
        let connection = entity::connection::ActiveModel {
            origin_id: ActiveValue::Set(connection.origin_id),
            destination_id: ActiveValue::Set(connection.destination_id),
            distance_km: ActiveValue::Set(connection.distance_km),
            duration_minutes: ActiveValue::Set(connection.duration_minutes),
        };

        connection.insert(self.db).await
    }

    /// Overwrites the supplied fields of the connection matching origin & destination
    ///
    /// Returns the number of rows updated, zero when no connection matches. No statement is
    /// issued when no fields are supplied.
    pub async fn update(
        &self,
        origin_id: i32,
        destination_id: i32,
        changes: UpdateConnectionDto,
    ) -> Result<u64, DbErr> {
        let mut connection = entity::connection::ActiveModel {
            ..Default::default()
        };

        if let Some(distance_km) = changes.distance_km {
            connection.distance_km = ActiveValue::Set(distance_km);
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            connection.duration_minutes = ActiveValue::Set(duration_minutes);
        }

        if !connection.is_changed() {
            return Ok(0);
        }

        entity::prelude::Connection::update_many()
            .set(connection)
            .filter(Self::by_key(origin_id, destination_id))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes the connection matching origin & destination
    ///
    /// Returns OK regardless of the connection existing, check
    /// [`DeleteResult::rows_affected`] to confirm.
    pub async fn delete(
        &self,
        origin_id: i32,
        destination_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Connection::delete_many()
            .filter(Self::by_key(origin_id, destination_id))
            .exec(self.db)
            .await
    }
}
