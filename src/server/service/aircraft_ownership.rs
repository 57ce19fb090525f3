//! Aircraft ownership service layer.
//!
//! Every keyed operation takes both halves of the composite key, there is no way to address
//! ownerships by aircraft or company alone.

use sea_orm::DatabaseConnection;

use crate::{
    model::ownership::{AircraftOwnershipDto, UpdateAircraftOwnershipDto},
    server::{data::aircraft_ownership::AircraftOwnershipRepository, error::Error},
};

/// Ownership operations over a database connection
pub struct AircraftOwnershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftOwnershipService<'a> {
    /// Creates a new instance of [`AircraftOwnershipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every ownership in storage order.
    pub async fn list_ownerships(&self) -> Result<Vec<AircraftOwnershipDto>, Error> {
        let ownership_repo = AircraftOwnershipRepository::new(self.db);

        let ownerships = ownership_repo.get_all().await?;

        Ok(ownerships
            .into_iter()
            .map(AircraftOwnershipDto::from)
            .collect())
    }

    /// Stores a new ownership.
    ///
    /// # Returns
    /// - `Ok(AircraftOwnershipDto)` - Stored ownership
    /// - `Err(Error::DbErr)` - Insert failed, e.g. duplicate key or unknown aircraft
    pub async fn create_ownership(
        &self,
        ownership: AircraftOwnershipDto,
    ) -> Result<AircraftOwnershipDto, Error> {
        let ownership_repo = AircraftOwnershipRepository::new(self.db);

        let ownership = ownership_repo.create(ownership).await?;

        tracing::debug!(
            aircraft_id = ownership.aircraft_id,
            company_id = ownership.company_id,
            "Created aircraft ownership"
        );

        Ok(ownership.into())
    }

    /// Overwrites the supplied fields of the ownership matching both key halves.
    ///
    /// Returns the number of rows updated.
    pub async fn update_ownership(
        &self,
        aircraft_id: i32,
        company_id: i32,
        changes: UpdateAircraftOwnershipDto,
    ) -> Result<u64, Error> {
        let ownership_repo = AircraftOwnershipRepository::new(self.db);

        let rows_affected = ownership_repo
            .update(aircraft_id, company_id, changes)
            .await?;

        Ok(rows_affected)
    }

    /// Deletes the ownership matching both key halves.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_ownership(&self, aircraft_id: i32, company_id: i32) -> Result<u64, Error> {
        let ownership_repo = AircraftOwnershipRepository::new(self.db);

        let result = ownership_repo.delete(aircraft_id, company_id).await?;

        Ok(result.rows_affected)
    }
}
