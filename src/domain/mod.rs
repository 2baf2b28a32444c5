//! # Domain Module
//!
//! Business logic for the rental desk application: entities, the pure rules
//! that govern them, and the services a UI layer calls.
//!
//! ## Module organization
//!
//! - **models**: Customer, Vehicle, Rental entities
//! - **rules**: pure validation and eligibility predicates (no I/O, total
//!   over their inputs)
//! - **commands**: command/result types the services accept and return
//! - **customer_service / vehicle_service / rental_service**: orchestration
//!   over injected repositories, enforcing the registration preconditions
//! - **rental_log**: the completed-rental record sink
//!
//! ## Business rules
//!
//! - Customers must be at least 25 (completed years) to register
//! - National-ID and license plate are unique business keys
//! - Vehicles at 10+ years in service are flagged for retirement
//! - A rental needs two already-persisted records and a strictly ordered
//!   date range
//! - Deletion is always soft: a single active flag, no other transitions

pub mod commands;
pub mod customer_service;
pub mod models;
pub mod rental_log;
pub mod rental_service;
pub mod rules;
pub mod vehicle_service;

pub use customer_service::CustomerService;
pub use rental_log::RentalLog;
pub use rental_service::RentalService;
pub use vehicle_service::VehicleService;
