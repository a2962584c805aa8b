//! Starpool Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Starpool.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod comments;
pub mod errors;
pub mod goals;
pub mod ratings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
