//! SQLite storage implementation for the investments service.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `investments-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific row types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod accounts;
pub mod miscellaneous;
pub mod mutual_funds;
pub mod stocks;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from investments-core for convenience
pub use investments_core::errors::{DatabaseError, Error, Result};
