//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so that signatures do not need to reach into the generated
//! `entity` crate directly.

/// Type alias for passenger database model.
///
/// # Fields (from `entity::passenger::Model`)
/// - `id` - Primary key, assigned by storage
/// - `name` - Full name
/// - `cpf` - Brazilian taxpayer identifier, 11 digits stored as text
/// - `phone` - Phone number in `(NN) NNNNN-NNNN` format
/// - `email` - Email address
/// - `date_of_birth` - Calendar date of birth
pub type PassengerModel = entity::passenger::Model;

/// Type alias for aircraft database model.
///
/// # Fields (from `entity::aircraft::Model`)
/// - `id` - Primary key
/// - `model` - Aircraft model designation
/// - `manufacturer` - Manufacturer name
/// - `capacity` - Seat capacity
pub type AircraftModel = entity::aircraft::Model;

/// Type alias for aircraft ownership database model.
///
/// # Fields (from `entity::aircraft_ownership::Model`)
/// - `aircraft_id` - Composite key half, foreign key to the aircraft
/// - `company_id` - Composite key half, owning or operating company
/// - `registration` - Registration mark under this company
/// - `acquired_on` - Date the company acquired the aircraft (nullable)
pub type AircraftOwnershipModel = entity::aircraft_ownership::Model;

/// Type alias for airport database model.
///
/// # Fields (from `entity::airport::Model`)
/// - `id` - Primary key
/// - `code` - IATA code (unique)
/// - `name` - Airport name
/// - `city` - City served
/// - `country` - Country
pub type AirportModel = entity::airport::Model;

/// Type alias for connection database model.
///
/// # Fields (from `entity::connection::Model`)
/// - `origin_id` - Composite key half, foreign key to the origin airport
/// - `destination_id` - Composite key half, foreign key to the destination airport
/// - `distance_km` - Great-circle distance in kilometres
/// - `duration_minutes` - Scheduled flight duration
pub type ConnectionModel = entity::connection::Model;
