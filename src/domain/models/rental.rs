use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::customer::Customer;
use super::vehicle::Vehicle;

/// Domain model representing a vehicle rental.
///
/// Holds the customer and vehicle it references, but does not own their
/// lifecycle: both are created and persisted independently before a rental
/// can reference them. Immutable once created, except for the active flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: Option<i64>,
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl Rental {
    pub fn new(
        customer: Customer,
        vehicle: Vehicle,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            customer,
            vehicle,
            start_date,
            end_date,
            active: true,
        }
    }
}
