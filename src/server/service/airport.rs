//! Airports are read-only through this service.

use sea_orm::DatabaseConnection;

use crate::{
    model::airport::AirportDto,
    server::{data::airport::AirportRepository, error::Error},
};

/// Airport operations over a database connection
pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    /// Creates a new instance of [`AirportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every airport in storage order.
    pub async fn list_airports(&self) -> Result<Vec<AirportDto>, Error> {
        let airport_repo = AirportRepository::new(self.db);

        let airports = airport_repo.get_all().await?;

        Ok(airports.into_iter().map(AirportDto::from).collect())
    }
}
