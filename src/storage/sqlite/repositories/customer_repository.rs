use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::Customer;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::CustomerStorage;

/// SQLite repository for customer records.
#[derive(Clone)]
pub struct CustomerRepository {
    db: DbConnection,
}

impl CustomerRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// Explicit row-to-entity mapping; the field list here mirrors the SELECT
/// clauses below.
fn map_customer(row: &SqliteRow) -> Customer {
    Customer {
        id: Some(row.get("id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        national_id: row.get("national_id"),
        birth_date: row.get::<Option<NaiveDate>, _>("birth_date"),
        active: row.get("active"),
    }
}

#[async_trait]
impl CustomerStorage for CustomerRepository {
    async fn insert_customer(&self, customer: &Customer) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (first_name, last_name, national_id, birth_date, active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.national_id)
        .bind(customer.birth_date)
        .bind(customer.active)
        .execute(self.db.pool())
        .await
        .context("inserting customer")?;

        Ok(result.last_insert_rowid())
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, national_id, birth_date, active
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(map_customer))
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, national_id, birth_date, active
            FROM customers
            WHERE national_id = ?
            "#,
        )
        .bind(national_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(map_customer))
    }

    async fn list_active_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, national_id, birth_date, active
            FROM customers
            WHERE active = 1
            ORDER BY first_name ASC, last_name ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(map_customer).collect())
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        let id = customer
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update a customer without an id"))?;

        sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, birth_date = ?, active = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.birth_date)
        .bind(customer.active)
        .bind(id)
        .execute(self.db.pool())
        .await
        .context("updating customer")?;

        Ok(())
    }
}
