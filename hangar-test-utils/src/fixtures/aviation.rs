use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_REGISTRATION, error::TestError, TestContext};

impl TestContext {
    pub fn aviation<'a>(&'a self) -> AviationFixtures<'a> {
        AviationFixtures { setup: self }
    }
}

pub struct AviationFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AviationFixtures<'a> {
    /// Insert an aircraft with the given ID and standard test attributes.
    pub async fn insert_mock_aircraft(
        &self,
        aircraft_id: i32,
    ) -> Result<entity::aircraft::Model, TestError> {
        Ok(
            entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
                id: ActiveValue::Set(aircraft_id),
                model: ActiveValue::Set("A320neo".to_string()),
                manufacturer: ActiveValue::Set("Airbus".to_string()),
                capacity: ActiveValue::Set(174),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an airport with the given ID; the IATA code is derived from the ID to stay unique.
    pub async fn insert_mock_airport(
        &self,
        airport_id: i32,
    ) -> Result<entity::airport::Model, TestError> {
        Ok(
            entity::prelude::Airport::insert(entity::airport::ActiveModel {
                id: ActiveValue::Set(airport_id),
                code: ActiveValue::Set(format!("A{:02}", airport_id)),
                name: ActiveValue::Set(format!("Test Airport {}", airport_id)),
                city: ActiveValue::Set("São Paulo".to_string()),
                country: ActiveValue::Set("Brasil".to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an ownership record, the aircraft must already exist.
    pub async fn insert_ownership(
        &self,
        aircraft_id: i32,
        company_id: i32,
    ) -> Result<entity::aircraft_ownership::Model, TestError> {
        Ok(entity::prelude::AircraftOwnership::insert(
            entity::aircraft_ownership::ActiveModel {
                aircraft_id: ActiveValue::Set(aircraft_id),
                company_id: ActiveValue::Set(company_id),
                registration: ActiveValue::Set(TEST_REGISTRATION.to_string()),
                acquired_on: ActiveValue::Set(NaiveDate::from_ymd_opt(2019, 11, 2)),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an aircraft together with an ownership record for it.
    pub async fn insert_mock_aircraft_with_ownership(
        &self,
        aircraft_id: i32,
        company_id: i32,
    ) -> Result<
        (
            entity::aircraft::Model,
            entity::aircraft_ownership::Model,
        ),
        TestError,
    > {
        let aircraft_model = self.insert_mock_aircraft(aircraft_id).await?;
        let ownership_model = self.insert_ownership(aircraft_id, company_id).await?;

        Ok((aircraft_model, ownership_model))
    }

    /// Insert a connection, both airports must already exist.
    pub async fn insert_connection(
        &self,
        origin_id: i32,
        destination_id: i32,
    ) -> Result<entity::connection::Model, TestError> {
        Ok(
            entity::prelude::Connection::insert(entity::connection::ActiveModel {
                origin_id: ActiveValue::Set(origin_id),
                destination_id: ActiveValue::Set(destination_id),
                distance_km: ActiveValue::Set(358),
                duration_minutes: ActiveValue::Set(65),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
