//! Service layer.
//!
//! One service per collection. Services own the gateway operations: they map each CRUD verb
//! onto a single repository call and convert database models into API DTOs. The only rule
//! enforced here is passenger validation before registration.

pub mod aircraft;
pub mod aircraft_ownership;
pub mod airport;
pub mod connection;
pub mod passenger;
