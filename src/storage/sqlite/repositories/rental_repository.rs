use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Customer, Rental, Vehicle, VehicleCategory};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::RentalStorage;

/// SQLite repository for rental records.
///
/// Rentals are stored by reference (customer_id / vehicle_id); reads hydrate
/// the referenced records via JOIN, so a rental whose references have been
/// removed drops out of listings rather than surfacing half-built.
#[derive(Clone)]
pub struct RentalRepository {
    db: DbConnection,
}

impl RentalRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

// One SELECT shape shared by every read; aliases keep the three entities'
// columns apart.
const RENTAL_SELECT: &str = r#"
    SELECT
        r.id AS rental_id, r.start_date, r.end_date, r.active AS rental_active,
        c.id AS customer_id, c.first_name, c.last_name, c.national_id,
        c.birth_date, c.active AS customer_active,
        v.id AS vehicle_id, v.plate, v.insurance_policy, v.category,
        v.registration_date, v.active AS vehicle_active
    FROM rentals r
    JOIN customers c ON c.id = r.customer_id
    JOIN vehicles v ON v.id = r.vehicle_id
"#;

/// Explicit row-to-entity mapping over the aliased JOIN columns.
fn map_rental(row: &SqliteRow) -> Result<Rental> {
    let category: String = row.get("category");

    let customer = Customer {
        id: Some(row.get("customer_id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        national_id: row.get("national_id"),
        birth_date: row.get::<Option<NaiveDate>, _>("birth_date"),
        active: row.get("customer_active"),
    };

    let vehicle = Vehicle {
        id: Some(row.get("vehicle_id")),
        plate: row.get("plate"),
        insurance_policy: row.get("insurance_policy"),
        category: category
            .parse::<VehicleCategory>()
            .context("reading rental row")?,
        registration_date: row.get::<Option<NaiveDate>, _>("registration_date"),
        active: row.get("vehicle_active"),
    };

    Ok(Rental {
        id: Some(row.get("rental_id")),
        customer,
        vehicle,
        start_date: row.get::<Option<NaiveDate>, _>("start_date"),
        end_date: row.get::<Option<NaiveDate>, _>("end_date"),
        active: row.get("rental_active"),
    })
}

#[async_trait]
impl RentalStorage for RentalRepository {
    async fn insert_rental(&self, rental: &Rental) -> Result<i64> {
        let customer_id = rental
            .customer
            .id
            .ok_or_else(|| anyhow::anyhow!("rental customer has no id"))?;
        let vehicle_id = rental
            .vehicle
            .id
            .ok_or_else(|| anyhow::anyhow!("rental vehicle has no id"))?;

        let result = sqlx::query(
            r#"
            INSERT INTO rentals (customer_id, vehicle_id, start_date, end_date, active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer_id)
        .bind(vehicle_id)
        .bind(rental.start_date)
        .bind(rental.end_date)
        .bind(rental.active)
        .execute(self.db.pool())
        .await
        .context("inserting rental")?;

        Ok(result.last_insert_rowid())
    }

    async fn get_rental(&self, id: i64) -> Result<Option<Rental>> {
        let query = format!("{RENTAL_SELECT} WHERE r.id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(map_rental).transpose()
    }

    async fn list_active_rentals(&self) -> Result<Vec<Rental>> {
        let query = format!("{RENTAL_SELECT} WHERE r.active = 1 ORDER BY r.start_date DESC");
        let rows = sqlx::query(&query).fetch_all(self.db.pool()).await?;

        rows.iter().map(map_rental).collect()
    }

    async fn list_rentals_for_customer(&self, customer_id: i64) -> Result<Vec<Rental>> {
        let query = format!("{RENTAL_SELECT} WHERE r.customer_id = ? ORDER BY r.start_date DESC");
        let rows = sqlx::query(&query)
            .bind(customer_id)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(map_rental).collect()
    }

    async fn set_rental_active(&self, id: i64, active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE rentals SET active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(self.db.pool())
            .await
            .context("updating rental active flag")?;

        Ok(result.rows_affected() > 0)
    }
}
