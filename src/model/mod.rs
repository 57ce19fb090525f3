//! Request and response bodies shared by the HTTP API.

pub mod aircraft;
pub mod airport;
pub mod api;
pub mod connection;
pub mod ownership;
pub mod passenger;
