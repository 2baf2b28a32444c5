//! Domain entities: plain data holders with identity and an active flag.

pub mod customer;
pub mod rental;
pub mod vehicle;

pub use customer::Customer;
pub use rental::Rental;
pub use vehicle::{Vehicle, VehicleCategory};
