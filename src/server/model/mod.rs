//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application state,
//! database model type aliases, and the validated passenger record that is handed from the
//! validation rules to storage.

pub mod app;
pub mod db;
pub mod passenger;
