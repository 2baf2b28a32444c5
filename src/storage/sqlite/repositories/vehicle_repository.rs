use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Vehicle, VehicleCategory};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::VehicleStorage;

/// SQLite repository for vehicle records.
#[derive(Clone)]
pub struct VehicleRepository {
    db: DbConnection,
}

impl VehicleRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// Explicit row-to-entity mapping; rejects rows whose category string is not
/// one of the closed variants.
fn map_vehicle(row: &SqliteRow) -> Result<Vehicle> {
    let category: String = row.get("category");
    Ok(Vehicle {
        id: Some(row.get("id")),
        plate: row.get("plate"),
        insurance_policy: row.get("insurance_policy"),
        category: category
            .parse::<VehicleCategory>()
            .context("reading vehicle row")?,
        registration_date: row.get::<Option<NaiveDate>, _>("registration_date"),
        active: row.get("active"),
    })
}

#[async_trait]
impl VehicleStorage for VehicleRepository {
    async fn insert_vehicle(&self, vehicle: &Vehicle) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO vehicles (plate, insurance_policy, category, registration_date, active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&vehicle.plate)
        .bind(&vehicle.insurance_policy)
        .bind(vehicle.category.as_str())
        .bind(vehicle.registration_date)
        .bind(vehicle.active)
        .execute(self.db.pool())
        .await
        .context("inserting vehicle")?;

        Ok(result.last_insert_rowid())
    }

    async fn get_vehicle(&self, id: i64) -> Result<Option<Vehicle>> {
        let row = sqlx::query(
            r#"
            SELECT id, plate, insurance_policy, category, registration_date, active
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(map_vehicle).transpose()
    }

    async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>> {
        let row = sqlx::query(
            r#"
            SELECT id, plate, insurance_policy, category, registration_date, active
            FROM vehicles
            WHERE plate = ?
            "#,
        )
        .bind(plate)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(map_vehicle).transpose()
    }

    async fn list_active_vehicles(
        &self,
        category: Option<VehicleCategory>,
    ) -> Result<Vec<Vehicle>> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT id, plate, insurance_policy, category, registration_date, active
                    FROM vehicles
                    WHERE active = 1 AND category = ?
                    ORDER BY plate ASC
                    "#,
                )
                .bind(category.as_str())
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, plate, insurance_policy, category, registration_date, active
                    FROM vehicles
                    WHERE active = 1
                    ORDER BY plate ASC
                    "#,
                )
                .fetch_all(self.db.pool())
                .await?
            }
        };

        rows.iter().map(map_vehicle).collect()
    }

    async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<()> {
        let id = vehicle
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update a vehicle without an id"))?;

        sqlx::query(
            r#"
            UPDATE vehicles
            SET insurance_policy = ?, category = ?, registration_date = ?, active = ?
            WHERE id = ?
            "#,
        )
        .bind(&vehicle.insurance_policy)
        .bind(vehicle.category.as_str())
        .bind(vehicle.registration_date)
        .bind(vehicle.active)
        .bind(id)
        .execute(self.db.pool())
        .await
        .context("updating vehicle")?;

        Ok(())
    }
}
