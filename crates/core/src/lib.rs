//! Centime Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Centime.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod incomes;
pub mod spending;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
