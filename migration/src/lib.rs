pub use sea_orm_migration::prelude::*;

mod m20251020_000001_aircraft;
mod m20251020_000002_airport;
mod m20251020_000003_passenger;
mod m20251020_000004_aircraft_ownership;
mod m20251020_000005_connection;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_aircraft::Migration),
            Box::new(m20251020_000002_airport::Migration),
            Box::new(m20251020_000003_passenger::Migration),
            Box::new(m20251020_000004_aircraft_ownership::Migration),
            Box::new(m20251020_000005_connection::Migration),
        ]
    }
}
