//! Data access layer repositories.
//!
//! One repository per entity. Every method issues exactly one statement: select-all,
//! insert, update filtered by key, or delete filtered by key. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against PostgreSQL in production, SQLite
//! in tests, or inside a caller-managed transaction.

pub mod aircraft;
pub mod aircraft_ownership;
pub mod airport;
pub mod connection;
pub mod passenger;

#[cfg(test)]
mod tests;
