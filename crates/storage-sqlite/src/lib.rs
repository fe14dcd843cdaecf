//! SQLite storage implementation for Centime.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `centime-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate stays database-agnostic and works with traits; the server wires
//! these repositories into the core services at startup.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod expenses;
pub mod incomes;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from centime-core for convenience
pub use centime_core::errors::{DatabaseError, Error, Result};
