pub mod customer_repository;
pub mod rental_repository;
pub mod vehicle_repository;

pub use customer_repository::CustomerRepository;
pub use rental_repository::RentalRepository;
pub use vehicle_repository::VehicleRepository;
