use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::rentals::{CreateRentalCommand, CreateRentalResult};
use crate::domain::models::Rental;
use crate::domain::rental_log::RentalLog;
use crate::domain::rules;
use crate::error::DomainError;
use crate::storage::traits::{CustomerStorage, RentalStorage, VehicleStorage};

/// Service for creating and listing rentals.
///
/// A rental needs an already-persisted, active customer and vehicle and a
/// strictly ordered date range. Completed rentals are also appended to the
/// rental log sink.
#[derive(Clone)]
pub struct RentalService {
    customer_repository: Arc<dyn CustomerStorage>,
    vehicle_repository: Arc<dyn VehicleStorage>,
    rental_repository: Arc<dyn RentalStorage>,
    rental_log: RentalLog,
}

impl RentalService {
    pub fn new(
        customer_repository: Arc<dyn CustomerStorage>,
        vehicle_repository: Arc<dyn VehicleStorage>,
        rental_repository: Arc<dyn RentalStorage>,
        rental_log: RentalLog,
    ) -> Self {
        Self {
            customer_repository,
            vehicle_repository,
            rental_repository,
            rental_log,
        }
    }

    /// Create a rental.
    ///
    /// The referenced customer and vehicle must exist and be active; the
    /// dates must pass the validity rule. On success the rental is persisted
    /// and one record is appended to the log sink. A log write failure is
    /// reported as a warning but does not fail the rental: the insert has
    /// already fully succeeded.
    pub async fn create_rental(
        &self,
        command: CreateRentalCommand,
    ) -> Result<CreateRentalResult, DomainError> {
        info!(
            "creating rental: customer={} vehicle={} {}..{}",
            command.customer_id, command.vehicle_id, command.start_date, command.end_date
        );

        let customer = self
            .customer_repository
            .get_customer(command.customer_id)
            .await?
            .filter(|c| c.active)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "no active customer with id {}",
                    command.customer_id
                ))
            })?;

        let vehicle = self
            .vehicle_repository
            .get_vehicle(command.vehicle_id)
            .await?
            .filter(|v| v.active)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "no active vehicle with id {}",
                    command.vehicle_id
                ))
            })?;

        let mut rental = Rental::new(
            customer,
            vehicle,
            Some(command.start_date),
            Some(command.end_date),
        );

        if !rules::dates_valid(&rental) {
            return Err(DomainError::validation_failed(
                "the end date must be after the start date",
            ));
        }

        let id = self.rental_repository.insert_rental(&rental).await?;
        rental.id = Some(id);

        if let Err(err) = self.rental_log.append(&rental) {
            warn!("rental {id} persisted but could not be logged: {err:#}");
        }

        info!(
            "created rental {id}: {} -> {} ({} days)",
            rental.customer.display_name(),
            rental.vehicle.plate,
            rules::duration_days(&rental)
        );

        Ok(CreateRentalResult { rental })
    }

    /// Soft-delete a rental.
    pub async fn deactivate_rental(&self, rental_id: i64) -> Result<(), DomainError> {
        info!("deactivating rental {rental_id}");

        let found = self
            .rental_repository
            .set_rental_active(rental_id, false)
            .await?;
        if !found {
            return Err(DomainError::not_found(format!(
                "no rental with id {rental_id}"
            )));
        }

        Ok(())
    }

    /// Active rentals, most recent start date first.
    pub async fn list_active_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        Ok(self.rental_repository.list_active_rentals().await?)
    }

    /// A customer's rentals, most recent start date first.
    pub async fn list_rentals_for_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Rental>, DomainError> {
        Ok(self
            .rental_repository
            .list_rentals_for_customer(customer_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::customers::RegisterCustomerCommand;
    use crate::domain::commands::vehicles::RegisterVehicleCommand;
    use crate::domain::customer_service::CustomerService;
    use crate::domain::models::VehicleCategory;
    use crate::domain::vehicle_service::VehicleService;
    use crate::storage::sqlite::{
        CustomerRepository, DbConnection, RentalRepository, VehicleRepository,
    };
    use chrono::{Datelike, Local, NaiveDate};
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        customers: CustomerService,
        vehicles: VehicleService,
        rentals: RentalService,
        log_dir: TempDir,
    }

    impl Fixture {
        fn log_contents(&self) -> String {
            fs::read_to_string(self.log_dir.path().join("alquileres.txt")).unwrap_or_default()
        }
    }

    async fn setup_test() -> Fixture {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        let customer_repo = Arc::new(CustomerRepository::new(db.clone()));
        let vehicle_repo = Arc::new(VehicleRepository::new(db.clone()));
        let rental_repo = Arc::new(RentalRepository::new(db));

        let log_dir = TempDir::new().unwrap();
        let rental_log = RentalLog::new(log_dir.path().join("alquileres.txt"));

        Fixture {
            customers: CustomerService::new(customer_repo.clone()),
            vehicles: VehicleService::new(vehicle_repo.clone()),
            rentals: RentalService::new(customer_repo, vehicle_repo, rental_repo, rental_log),
            log_dir,
        }
    }

    fn adult_birth_date() -> NaiveDate {
        let today = Local::now().date_naive();
        today
            .with_year(today.year() - 30)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - 30, 2, 28).unwrap())
    }

    async fn registered_customer_id(fixture: &Fixture, dni: &str) -> i64 {
        fixture
            .customers
            .register_customer(RegisterCustomerCommand {
                first_name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                national_id: dni.to_string(),
                birth_date: Some(adult_birth_date()),
            })
            .await
            .unwrap()
            .customer
            .id
            .unwrap()
    }

    async fn registered_vehicle_id(fixture: &Fixture, plate: &str) -> i64 {
        fixture
            .vehicles
            .register_vehicle(RegisterVehicleCommand {
                plate: plate.to_string(),
                insurance_policy: "POL-1".to_string(),
                category: VehicleCategory::Small,
                registration_date: Some(date(2022, 1, 1)),
            })
            .await
            .unwrap()
            .vehicle
            .id
            .unwrap()
    }

    #[tokio::test]
    async fn create_rental_persists_and_logs() {
        let fixture = setup_test().await;
        let customer_id = registered_customer_id(&fixture, "11111111A").await;
        let vehicle_id = registered_vehicle_id(&fixture, "1234ABC").await;

        let result = fixture
            .rentals
            .create_rental(CreateRentalCommand {
                customer_id,
                vehicle_id,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 8),
            })
            .await
            .unwrap();

        assert!(result.rental.id.is_some());
        assert_eq!(result.rental.customer.id, Some(customer_id));
        assert_eq!(result.rental.vehicle.id, Some(vehicle_id));

        let log = fixture.log_contents();
        assert!(log.contains("DNI: 11111111A"));
        assert!(log.contains("Vehiculo: 1234ABC"));
        assert!(log.contains("Dias: 7"));
    }

    #[tokio::test]
    async fn create_rental_rejects_invalid_dates() {
        let fixture = setup_test().await;
        let customer_id = registered_customer_id(&fixture, "11111111A").await;
        let vehicle_id = registered_vehicle_id(&fixture, "1234ABC").await;

        for end_date in [date(2024, 2, 1), date(2024, 1, 25)] {
            let err = fixture
                .rentals
                .create_rental(CreateRentalCommand {
                    customer_id,
                    vehicle_id,
                    start_date: date(2024, 2, 1),
                    end_date,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::ValidationFailed(_)));
        }

        // Nothing persisted, nothing logged.
        assert!(fixture.rentals.list_active_rentals().await.unwrap().is_empty());
        assert!(fixture.log_contents().is_empty());
    }

    #[tokio::test]
    async fn create_rental_requires_persisted_references() {
        let fixture = setup_test().await;
        let customer_id = registered_customer_id(&fixture, "11111111A").await;

        let err = fixture
            .rentals
            .create_rental(CreateRentalCommand {
                customer_id,
                vehicle_id: 42,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 8),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = fixture
            .rentals
            .create_rental(CreateRentalCommand {
                customer_id: 42,
                vehicle_id: 42,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 8),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rental_rejects_deactivated_references() {
        let fixture = setup_test().await;
        let customer_id = registered_customer_id(&fixture, "11111111A").await;
        let vehicle_id = registered_vehicle_id(&fixture, "1234ABC").await;

        fixture.vehicles.deactivate_vehicle(vehicle_id).await.unwrap();

        let err = fixture
            .rentals
            .create_rental(CreateRentalCommand {
                customer_id,
                vehicle_id,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 8),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn listings_are_most_recent_first_and_per_customer() {
        let fixture = setup_test().await;
        let ana = registered_customer_id(&fixture, "11111111A").await;
        let berta = registered_customer_id(&fixture, "22222222B").await;
        let vehicle_id = registered_vehicle_id(&fixture, "1234ABC").await;

        for (customer_id, start, end) in [
            (ana, date(2024, 1, 10), date(2024, 1, 12)),
            (berta, date(2024, 3, 1), date(2024, 3, 5)),
            (ana, date(2024, 2, 5), date(2024, 2, 7)),
        ] {
            fixture
                .rentals
                .create_rental(CreateRentalCommand {
                    customer_id,
                    vehicle_id,
                    start_date: start,
                    end_date: end,
                })
                .await
                .unwrap();
        }

        let all = fixture.rentals.list_active_rentals().await.unwrap();
        let starts: Vec<NaiveDate> = all.iter().filter_map(|r| r.start_date).collect();
        assert_eq!(
            starts,
            vec![date(2024, 3, 1), date(2024, 2, 5), date(2024, 1, 10)]
        );

        let anas = fixture.rentals.list_rentals_for_customer(ana).await.unwrap();
        assert_eq!(anas.len(), 2);
        assert!(anas.iter().all(|r| r.customer.id == Some(ana)));
    }

    #[tokio::test]
    async fn deactivate_rental_hides_it_from_listings() {
        let fixture = setup_test().await;
        let customer_id = registered_customer_id(&fixture, "11111111A").await;
        let vehicle_id = registered_vehicle_id(&fixture, "1234ABC").await;

        let created = fixture
            .rentals
            .create_rental(CreateRentalCommand {
                customer_id,
                vehicle_id,
                start_date: date(2024, 2, 1),
                end_date: date(2024, 2, 8),
            })
            .await
            .unwrap();

        fixture
            .rentals
            .deactivate_rental(created.rental.id.unwrap())
            .await
            .unwrap();
        assert!(fixture.rentals.list_active_rentals().await.unwrap().is_empty());

        let err = fixture.rentals.deactivate_rental(9999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
