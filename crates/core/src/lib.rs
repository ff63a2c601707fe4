//! Investments Core - Domain entities, services, and traits.
//!
//! This crate contains the domain logic for the investments service.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod errors;
pub mod mapping;
pub mod miscellaneous;
pub mod mutual_funds;
pub mod stocks;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
