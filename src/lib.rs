//! # Rental Desk
//!
//! Core library for a car-rental management application.
//!
//! The crate is organized in two layers:
//!
//! - **Domain**: entities (customers, vehicles, rentals), the pure business
//!   rules that govern them, and the services a UI layer calls.
//! - **Storage**: repository traits plus the SQLite implementation behind
//!   them.
//!
//! The domain layer never touches the database directly; services receive
//! their repositories at construction time, so any storage backend that
//! implements the traits in [`storage::traits`] can be plugged in.

pub mod domain;
pub mod error;
pub mod storage;

pub use domain::models::{Customer, Rental, Vehicle, VehicleCategory};
pub use error::DomainError;
pub use storage::sqlite::DbConnection;
