//! HTTP controller endpoints for the Hangar web API.
//!
//! One module per collection. Controllers extract the path key and JSON body, delegate to the
//! matching service and map the outcome to a status code. Failures are converted into
//! responses by [`crate::server::error::Error`].

pub mod aircraft;
pub mod aircraft_ownership;
pub mod airport;
pub mod connection;
pub mod passenger;
