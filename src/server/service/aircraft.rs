//! Aircraft are read-only through this service.

use sea_orm::DatabaseConnection;

use crate::{
    model::aircraft::AircraftDto,
    server::{data::aircraft::AircraftRepository, error::Error},
};

/// Aircraft operations over a database connection
pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    /// Creates a new instance of [`AircraftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every aircraft in storage order.
    pub async fn list_aircraft(&self) -> Result<Vec<AircraftDto>, Error> {
        let aircraft_repo = AircraftRepository::new(self.db);

        let aircraft = aircraft_repo.get_all().await?;

        Ok(aircraft.into_iter().map(AircraftDto::from).collect())
    }
}
