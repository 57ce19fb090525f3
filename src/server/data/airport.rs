//! Read-only access to the airport catalogue.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::AirportModel;

/// Queries over the `airport` table
pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    /// Creates a new instance of [`AirportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every airport
    pub async fn get_all(&self) -> Result<Vec<AirportModel>, DbErr> {
        entity::prelude::Airport::find().all(self.db).await
    }
}
