pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_ownership::Entity as AircraftOwnership;
pub use super::airport::Entity as Airport;
pub use super::connection::Entity as Connection;
pub use super::passenger::Entity as Passenger;
