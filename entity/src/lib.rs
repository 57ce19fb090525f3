//! SeaORM entities for the hangar schema.

pub mod prelude;

pub mod aircraft;
pub mod aircraft_ownership;
pub mod airport;
pub mod connection;
pub mod passenger;
