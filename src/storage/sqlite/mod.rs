//! SQLite-backed storage.
//!
//! - **connection.rs** — pool management and schema setup
//! - **repositories/** — one repository per entity implementing the traits
//!   in [`crate::storage::traits`]

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{CustomerRepository, RentalRepository, VehicleRepository};
