//! Utility functions shared across server modules.

pub mod time;
