//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    aircraft: Vec<i32>,
    airports: Vec<i32>,
    passengers: Vec<String>,                 // CPFs
    ownerships: Vec<(i32, i32)>,             // (aircraft_id, company_id)
    connections: Vec<(i32, i32)>,            // (origin_id, destination_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            aircraft: Vec::new(),
            airports: Vec::new(),
            passengers: Vec::new(),
            ownerships: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Add every table of the schema to the test database.
    ///
    /// Creates Aircraft, Airport, Passenger, AircraftOwnership and Connection in
    /// foreign-key dependency order.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables; referenced tables must be added first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hangar_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), hangar_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Aircraft)
    ///     .with_table(AircraftOwnership)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock aircraft into database.
    pub fn with_mock_aircraft(mut self, aircraft_id: i32) -> Self {
        self.aircraft.push(aircraft_id);
        self
    }

    /// Insert mock airport into database.
    pub fn with_mock_airport(mut self, airport_id: i32) -> Self {
        self.airports.push(airport_id);
        self
    }

    /// Insert mock passenger with the given CPF into database.
    pub fn with_mock_passenger(mut self, cpf: impl Into<String>) -> Self {
        self.passengers.push(cpf.into());
        self
    }

    /// Insert ownership record into database.
    ///
    /// The aircraft must be added via `with_mock_aircraft` as well.
    pub fn with_ownership(mut self, aircraft_id: i32, company_id: i32) -> Self {
        self.ownerships.push((aircraft_id, company_id));
        self
    }

    /// Insert connection record into database.
    ///
    /// Both airports must be added via `with_mock_airport` as well.
    pub fn with_connection(mut self, origin_id: i32, destination_id: i32) -> Self {
        self.connections.push((origin_id, destination_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (full schema if specified, then custom tables)
    /// 2. Inserts referenced records (aircraft, airports), then passengers
    /// 3. Inserts associative records (ownerships, connections)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Airport),
                schema.create_table_from_entity(entity::prelude::Passenger),
                schema.create_table_from_entity(entity::prelude::AircraftOwnership),
                schema.create_table_from_entity(entity::prelude::Connection),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert referenced records
        for aircraft_id in self.aircraft {
            setup.aviation().insert_mock_aircraft(aircraft_id).await?;
        }

        for airport_id in self.airports {
            setup.aviation().insert_mock_airport(airport_id).await?;
        }

        for cpf in self.passengers {
            setup.passenger().insert_mock_passenger(&cpf).await?;
        }

        // 3. Insert associative records
        for (aircraft_id, company_id) in self.ownerships {
            setup
                .aviation()
                .insert_ownership(aircraft_id, company_id)
                .await?;
        }

        for (origin_id, destination_id) in self.connections {
            setup
                .aviation()
                .insert_connection(origin_id, destination_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
