use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::vehicles::{
    RegisterVehicleCommand, RegisterVehicleResult, UpdateVehicleCommand, UpdateVehicleResult,
};
use crate::domain::models::{Vehicle, VehicleCategory};
use crate::domain::rules;
use crate::error::DomainError;
use crate::storage::traits::VehicleStorage;

/// Service for managing the vehicle fleet.
#[derive(Clone)]
pub struct VehicleService {
    vehicle_repository: Arc<dyn VehicleStorage>,
}

impl VehicleService {
    pub fn new(vehicle_repository: Arc<dyn VehicleStorage>) -> Self {
        Self { vehicle_repository }
    }

    /// Register a new vehicle.
    ///
    /// Rejected when a vehicle with the same plate already exists. A vehicle
    /// already past the retirement boundary is still registered; the result
    /// carries `retirement_due` so the caller can warn.
    pub async fn register_vehicle(
        &self,
        command: RegisterVehicleCommand,
    ) -> Result<RegisterVehicleResult, DomainError> {
        let plate = command.plate.trim().to_string();
        info!("registering vehicle with plate {plate}");

        if plate.is_empty() {
            return Err(DomainError::validation_failed("plate cannot be empty"));
        }

        if self.vehicle_repository.find_by_plate(&plate).await?.is_some() {
            warn!("vehicle with plate {plate} already exists");
            return Err(DomainError::duplicate_key(format!(
                "a vehicle with plate {plate} already exists"
            )));
        }

        let mut vehicle = Vehicle::new(
            plate,
            command.insurance_policy.trim(),
            command.category,
            command.registration_date,
        );

        let retirement_due = rules::must_be_retired_on(&vehicle, Local::now().date_naive());
        if retirement_due {
            warn!(
                "vehicle {} is {} years in service, past the retirement boundary",
                vehicle.plate,
                rules::years_in_service(&vehicle)
            );
        }

        let id = self.vehicle_repository.insert_vehicle(&vehicle).await?;
        vehicle.id = Some(id);

        info!("registered vehicle {} with id {id}", vehicle.plate);

        Ok(RegisterVehicleResult {
            vehicle,
            retirement_due,
        })
    }

    /// Update an existing vehicle. Fields left as `None` are unchanged.
    pub async fn update_vehicle(
        &self,
        command: UpdateVehicleCommand,
    ) -> Result<UpdateVehicleResult, DomainError> {
        info!("updating vehicle {}", command.vehicle_id);

        let mut vehicle = self
            .vehicle_repository
            .get_vehicle(command.vehicle_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("no vehicle with id {}", command.vehicle_id))
            })?;

        if let Some(insurance_policy) = command.insurance_policy {
            vehicle.insurance_policy = insurance_policy.trim().to_string();
        }
        if let Some(category) = command.category {
            vehicle.category = category;
        }
        if let Some(registration_date) = command.registration_date {
            vehicle.registration_date = Some(registration_date);
        }
        if let Some(active) = command.active {
            vehicle.active = active;
        }

        self.vehicle_repository.update_vehicle(&vehicle).await?;

        Ok(UpdateVehicleResult { vehicle })
    }

    /// Soft-delete a vehicle.
    pub async fn deactivate_vehicle(&self, vehicle_id: i64) -> Result<(), DomainError> {
        info!("deactivating vehicle {vehicle_id}");

        let mut vehicle = self
            .vehicle_repository
            .get_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("no vehicle with id {vehicle_id}")))?;

        vehicle.active = false;
        self.vehicle_repository.update_vehicle(&vehicle).await?;

        Ok(())
    }

    /// Look up a vehicle by plate.
    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DomainError> {
        Ok(self.vehicle_repository.find_by_plate(plate.trim()).await?)
    }

    /// Active vehicles ordered by plate, optionally restricted to one
    /// category.
    pub async fn list_active_vehicles(
        &self,
        category: Option<VehicleCategory>,
    ) -> Result<Vec<Vehicle>, DomainError> {
        Ok(self.vehicle_repository.list_active_vehicles(category).await?)
    }
}
