//! Business rules for customers, vehicles and rentals.
//!
//! Every function here is pure and total: no I/O, no hidden state, and no
//! errors. Missing dates produce the documented default outputs (zero age,
//! zero duration, invalid dates) instead of panics.
//!
//! Each rule that depends on "today" comes in two forms: an `_on` variant
//! taking the evaluation date explicitly, and a convenience wrapper that
//! reads the local calendar date. Callers validating several rules in one
//! pass should read the date once and use the `_on` variants so all checks
//! agree on what "now" means.

use chrono::{Datelike, Local, NaiveDate};

use super::models::{Customer, Rental, Vehicle};

/// Minimum age, in completed years, required to rent a vehicle.
pub const MIN_CUSTOMER_AGE: i32 = 25;

/// Fleet age, in completed years, at which a vehicle must be retired.
pub const VEHICLE_RETIREMENT_YEARS: i32 = 10;

/// Completed calendar years between two dates.
///
/// Calendar-year arithmetic, not day division: the year difference drops by
/// one when the month/day of `to` has not yet reached the month/day of
/// `from`. An anniversary counts as completed on the day itself.
pub fn completed_years(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Customer age in completed years as of `on`. Zero when the birth date is
/// unset.
pub fn age_on(customer: &Customer, on: NaiveDate) -> i32 {
    match customer.birth_date {
        Some(birth) => completed_years(birth, on),
        None => 0,
    }
}

/// Customer age as of today.
pub fn age(customer: &Customer) -> i32 {
    age_on(customer, Local::now().date_naive())
}

/// Whether the customer is old enough to rent as of `on`.
///
/// A birth date exactly [`MIN_CUSTOMER_AGE`] years before `on`, to the day,
/// counts as eligible. A customer without a birth date never is.
pub fn is_eligible_on(customer: &Customer, on: NaiveDate) -> bool {
    customer.birth_date.is_some() && age_on(customer, on) >= MIN_CUSTOMER_AGE
}

/// Whether the customer is old enough to rent as of today.
pub fn is_eligible(customer: &Customer) -> bool {
    is_eligible_on(customer, Local::now().date_naive())
}

/// Completed years since the vehicle was registered, as of `on`. Zero when
/// the registration date is unset.
pub fn years_in_service_on(vehicle: &Vehicle, on: NaiveDate) -> i32 {
    match vehicle.registration_date {
        Some(registered) => completed_years(registered, on),
        None => 0,
    }
}

/// Completed years since registration, as of today.
pub fn years_in_service(vehicle: &Vehicle) -> i32 {
    years_in_service_on(vehicle, Local::now().date_naive())
}

/// Whether the vehicle has reached [`VEHICLE_RETIREMENT_YEARS`] in service
/// as of `on` (boundary inclusive).
pub fn must_be_retired_on(vehicle: &Vehicle, on: NaiveDate) -> bool {
    vehicle.registration_date.is_some()
        && years_in_service_on(vehicle, on) >= VEHICLE_RETIREMENT_YEARS
}

/// Whether the vehicle has reached retirement age as of today.
pub fn must_be_retired(vehicle: &Vehicle) -> bool {
    must_be_retired_on(vehicle, Local::now().date_naive())
}

/// Whether the rental period is well-formed: both dates present and the end
/// strictly after the start. Equal dates are invalid.
pub fn dates_valid(rental: &Rental) -> bool {
    match (rental.start_date, rental.end_date) {
        (Some(start), Some(end)) => end > start,
        _ => false,
    }
}

/// Rental duration as the calendar-day difference end − start. Zero when
/// either date is unset.
pub fn duration_days(rental: &Rental) -> i64 {
    match (rental.start_date, rental.end_date) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    }
}
