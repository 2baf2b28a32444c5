//! Storage abstraction traits.
//!
//! The domain services depend on these traits, never on a concrete backend,
//! so the SQLite implementation in [`crate::storage::sqlite`] can be swapped
//! for anything else that fulfils the same contracts.
//!
//! Listing order is part of the contract: customers by name ascending,
//! vehicles by plate ascending, rentals by start date descending. Default
//! listings exclude inactive (soft-deleted) records.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Customer, Rental, Vehicle, VehicleCategory};

/// Persistence operations for customers.
#[async_trait]
pub trait CustomerStorage: Send + Sync {
    /// Insert a new customer and return the assigned identifier.
    async fn insert_customer(&self, customer: &Customer) -> Result<i64>;

    /// Retrieve a customer by identifier.
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>>;

    /// Look up a customer by national-ID (the unique business key).
    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Customer>>;

    /// List active customers ordered by first name, then last name.
    async fn list_active_customers(&self) -> Result<Vec<Customer>>;

    /// Update an existing customer (including the active flag).
    async fn update_customer(&self, customer: &Customer) -> Result<()>;
}

/// Persistence operations for vehicles.
#[async_trait]
pub trait VehicleStorage: Send + Sync {
    /// Insert a new vehicle and return the assigned identifier.
    async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<i64>;

    /// Retrieve a vehicle by identifier.
    async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>>;

    /// Look up a vehicle by license plate (the unique business key).
    async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>>;

    /// List active vehicles ordered by plate, optionally filtered by
    /// category.
    async fn list_active_vehicles(
        &self,
        category: Option<VehicleCategory>,
    ) -> Result<Vec<Vehicle>>;

    /// Update an existing vehicle (including the active flag).
    async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<()>;
}

/// Persistence operations for rentals.
#[async_trait]
pub trait RentalStorage: Send + Sync {
    /// Insert a new rental and return the assigned identifier. The rental's
    /// customer and vehicle must already carry identifiers.
    async fn insert_rental(&self, rental: &Rental) -> Result<i64>;

    /// Retrieve a rental by identifier, with its customer and vehicle
    /// hydrated.
    async fn get_rental(&self, id: i64) -> Result<Option<Rental>>;

    /// List active rentals ordered by start date descending.
    async fn list_active_rentals(&self) -> Result<Vec<Rental>>;

    /// List a customer's rentals ordered by start date descending.
    async fn list_rentals_for_customer(&self, customer_id: i64) -> Result<Vec<Rental>>;

    /// Flip a rental's active flag. Returns false when no such rental
    /// exists.
    async fn set_rental_active(&self, id: i64, active: bool) -> Result<bool>;
}
