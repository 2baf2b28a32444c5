//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of the services in this layer.
//! A UI or API layer maps its own form/DTO types onto these before calling
//! the services.

pub mod customers {
    use crate::domain::models::Customer;
    use chrono::NaiveDate;

    /// Input for registering a new customer.
    #[derive(Debug, Clone)]
    pub struct RegisterCustomerCommand {
        pub first_name: String,
        pub last_name: String,
        pub national_id: String,
        pub birth_date: Option<NaiveDate>,
    }

    /// Input for updating an existing customer. `None` fields are left
    /// unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCustomerCommand {
        pub customer_id: i64,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub birth_date: Option<NaiveDate>,
        pub active: Option<bool>,
    }

    /// Result of registering a customer.
    #[derive(Debug, Clone)]
    pub struct RegisterCustomerResult {
        pub customer: Customer,
    }

    /// Result of updating a customer.
    #[derive(Debug, Clone)]
    pub struct UpdateCustomerResult {
        pub customer: Customer,
    }
}

pub mod vehicles {
    use crate::domain::models::{Vehicle, VehicleCategory};
    use chrono::NaiveDate;

    /// Input for registering a new vehicle.
    #[derive(Debug, Clone)]
    pub struct RegisterVehicleCommand {
        pub plate: String,
        pub insurance_policy: String,
        pub category: VehicleCategory,
        pub registration_date: Option<NaiveDate>,
    }

    /// Input for updating an existing vehicle. `None` fields are left
    /// unchanged. The plate is a business key and cannot be changed.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateVehicleCommand {
        pub vehicle_id: i64,
        pub insurance_policy: Option<String>,
        pub category: Option<VehicleCategory>,
        pub registration_date: Option<NaiveDate>,
        pub active: Option<bool>,
    }

    /// Result of registering a vehicle.
    ///
    /// `retirement_due` flags vehicles already past the retirement boundary;
    /// registration still succeeds, the caller decides how to warn.
    #[derive(Debug, Clone)]
    pub struct RegisterVehicleResult {
        pub vehicle: Vehicle,
        pub retirement_due: bool,
    }

    /// Result of updating a vehicle.
    #[derive(Debug, Clone)]
    pub struct UpdateVehicleResult {
        pub vehicle: Vehicle,
    }
}

pub mod rentals {
    use crate::domain::models::Rental;
    use chrono::NaiveDate;

    /// Input for creating a rental. Both referenced records must already be
    /// persisted.
    #[derive(Debug, Clone)]
    pub struct CreateRentalCommand {
        pub customer_id: i64,
        pub vehicle_id: i64,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    /// Result of creating a rental.
    #[derive(Debug, Clone)]
    pub struct CreateRentalResult {
        pub rental: Rental,
    }
}
