//! Read-only access to the aircraft catalogue.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::AircraftModel;

/// Queries over the `aircraft` table
pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every aircraft
    pub async fn get_all(&self) -> Result<Vec<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find().all(self.db).await
    }
}
