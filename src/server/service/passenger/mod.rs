//! Passenger service layer.
//!
//! Registration runs the passenger validation rules before anything reaches storage; list,
//! update and delete are direct hand-offs to [`PassengerRepository`] with no re-validation and
//! no existence checks.

pub mod validation;

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::passenger::{CreatePassengerDto, PassengerDto, UpdatePassengerDto},
    server::{
        data::passenger::PassengerRepository, error::Error,
        service::passenger::validation::validate_passenger,
    },
};

/// Service for passenger registration and maintenance.
pub struct PassengerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerService<'a> {
    /// Creates a new instance of PassengerService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every passenger.
    ///
    /// # Returns
    /// - `Ok(Vec<PassengerDto>)` - All passengers in storage order, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_passengers(&self) -> Result<Vec<PassengerDto>, Error> {
        let passenger_repo = PassengerRepository::new(self.db);

        let passengers = passenger_repo.get_all().await?;

        Ok(passengers.into_iter().map(PassengerDto::from).collect())
    }

    /// Registers a passenger, measuring the minimum age against today's UTC date.
    ///
    /// See [`Self::create_passenger_as_of`].
    pub async fn create_passenger(
        &self,
        candidate: CreatePassengerDto,
    ) -> Result<PassengerDto, Error> {
        self.create_passenger_as_of(candidate, Utc::now().date_naive())
            .await
    }

    /// Registers a passenger after validating it against the registration rules.
    ///
    /// Validation runs exactly once and before any database access; a rejected candidate
    /// is never persisted.
    ///
    /// # Arguments
    /// - `candidate` - Passenger as submitted by the client
    /// - `today` - Date the minimum age is measured against
    ///
    /// # Returns
    /// - `Ok(PassengerDto)` - Stored passenger including its assigned ID
    /// - `Err(Error::ValidationError)` - A registration rule failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_passenger_as_of(
        &self,
        candidate: CreatePassengerDto,
        today: NaiveDate,
    ) -> Result<PassengerDto, Error> {
        let passenger = validate_passenger(candidate, today)?;

        let passenger_repo = PassengerRepository::new(self.db);
        let passenger = passenger_repo.create(passenger).await?;

        tracing::debug!(passenger_id = passenger.id, "Registered passenger");

        Ok(passenger.into())
    }

    /// Overwrites the supplied fields of a passenger.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, 0 when the ID matched nothing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_passenger(
        &self,
        passenger_id: i32,
        changes: UpdatePassengerDto,
    ) -> Result<u64, Error> {
        let passenger_repo = PassengerRepository::new(self.db);

        let rows_affected = passenger_repo.update(passenger_id, changes).await?;

        Ok(rows_affected)
    }

    /// Deletes a passenger.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the ID matched nothing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_passenger(&self, passenger_id: i32) -> Result<u64, Error> {
        let passenger_repo = PassengerRepository::new(self.db);

        let result = passenger_repo.delete(passenger_id).await?;

        Ok(result.rows_affected)
    }
}
