//! Storage-specific error types for SQLite operations.
//!
//! Diesel and r2d2 errors never leave this crate as-is; they are wrapped in
//! [`StorageError`] and converted to the database-agnostic types in
//! `centime_core` at the repository boundary.

use diesel::result::Error as DieselError;
use thiserror::Error;

use centime_core::errors::{DatabaseError, Error};

/// Errors internal to the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Core error: {0}")]
    CoreError(Error),
}

// The write actor wraps jobs in a transaction whose error type must implement
// From<diesel::result::Error> and absorb core errors coming out of the job.
// The core error is carried whole so that NotFound and constraint violations
// raised inside a write job keep their variant across the actor boundary.
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Database(DatabaseError::ForeignKeyViolation(
                info.message().to_string(),
            )),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::SerializationError(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::CoreError(e) => e,
        }
    }
}

/// Converts Diesel-family errors straight to a core [`Error`].
///
/// Orphan rules forbid `From<DieselError> for Error` here, so the conversion
/// lives on an extension trait instead.
pub trait DieselErrorExt {
    fn into_core_error(self) -> Error;
}

impl DieselErrorExt for DieselError {
    fn into_core_error(self) -> Error {
        StorageError::QueryFailed(self).into()
    }
}

impl DieselErrorExt for r2d2::Error {
    fn into_core_error(self) -> Error {
        StorageError::PoolError(self).into()
    }
}

impl DieselErrorExt for diesel::ConnectionError {
    fn into_core_error(self) -> Error {
        StorageError::ConnectionFailed(self).into()
    }
}

/// Provides `.into_core()` on results carrying Diesel or pool errors.
pub trait IntoCore<T> {
    fn into_core(self) -> centime_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> centime_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> centime_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
