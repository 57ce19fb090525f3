//! Hangar: CRUD service for passengers, aircraft, airports and flight connections.

#![warn(missing_docs)]

pub mod model;
pub mod server;
