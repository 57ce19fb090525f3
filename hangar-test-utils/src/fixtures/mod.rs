//! Test fixture modules for database record creation.
//!
//! - `aviation` - Aircraft, airports, aircraft ownerships and connections
//! - `passenger` - Passenger records inserted directly, bypassing validation

pub mod aviation;
pub mod passenger;
