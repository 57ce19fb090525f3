//! Server application core modules.
//!
//! This module contains all server-side functionality for the Hangar service: HTTP routing,
//! passenger validation, the per-entity storage gateways, configuration and startup. Each
//! collection (passengers, aircraft, aircraft ownerships, airports, connections) is exposed
//! through a controller that hands off to a service, which in turn issues exactly one
//! statement through its repository.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
