//! Flight connection service layer.
//!
//! Every keyed operation takes both origin and destination.

use sea_orm::DatabaseConnection;

use crate::{
    model::connection::{ConnectionDto, UpdateConnectionDto},
    server::{data::connection::ConnectionRepository, error::Error},
};

/// Connection operations over a database connection
pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionService<'a> {
    /// Creates a new instance of [`ConnectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every connection in storage order.
    pub async fn list_connections(&self) -> Result<Vec<ConnectionDto>, Error> {
        let connection_repo = ConnectionRepository::new(self.db);

        let connections = connection_repo.get_all().await?;

        Ok(connections.into_iter().map(ConnectionDto::from).collect())
    }

    /// Stores a new connection.
    ///
    /// # Returns
    /// - `Ok(ConnectionDto)` - Stored connection
    /// - `Err(Error::DbErr)` - Insert failed, e.g. duplicate key or unknown airport
    pub async fn create_connection(
        &self,
        connection: ConnectionDto,
    ) -> Result<ConnectionDto, Error> {
        let connection_repo = ConnectionRepository::new(self.db);

        let connection = connection_repo.create(connection).await?;

        tracing::debug!(
            origin_id = connection.origin_id,
            destination_id = connection.destination_id,
            "Created connection"
        );

        Ok(connection.into())
    }

    /// Overwrites the supplied fields of the connection matching origin & destination.
    ///
    /// Returns the number of rows updated.
    pub async fn update_connection(
        &self,
        origin_id: i32,
        destination_id: i32,
        changes: UpdateConnectionDto,
    ) -> Result<u64, Error> {
        let connection_repo = ConnectionRepository::new(self.db);

        let rows_affected = connection_repo
            .update(origin_id, destination_id, changes)
            .await?;

        Ok(rows_affected)
    }

    /// Deletes the connection matching origin & destination.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_connection(
        &self,
        origin_id: i32,
        destination_id: i32,
    ) -> Result<u64, Error> {
        let connection_repo = ConnectionRepository::new(self.db);

        let result = connection_repo.delete(origin_id, destination_id).await?;

        Ok(result.rows_affected)
    }
}
