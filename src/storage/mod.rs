//! # Storage Module
//!
//! Handles all data persistence for the rental desk application.
//!
//! The domain layer talks to the traits in [`traits`]; the concrete SQLite
//! implementation lives in [`sqlite`]. Swapping the backend (another
//! database, a REST data service, fixtures for tests) means implementing the
//! traits, nothing in the domain layer changes.
//!
//! ## Key responsibilities
//!
//! - **Connection management**: database lifecycle and schema setup
//! - **Repositories**: explicit row ↔ entity mapping per table
//! - **Listing contracts**: deterministic orderings the UI and the tests
//!   rely on (customers by name, vehicles by plate, rentals by start date
//!   descending)
//! - **Soft deletes**: inactive records are kept but excluded from default
//!   listings

pub mod sqlite;
pub mod traits;

pub use sqlite::DbConnection;
