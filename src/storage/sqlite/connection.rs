use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

// The database URL for the production database, overridable via the
// RENTAL_DESK_DB environment variable.
const DATABASE_URL: &str = "sqlite:rental-desk.db";
const DATABASE_URL_ENV: &str = "RENTAL_DESK_DB";

/// DbConnection manages the SQLite pool and schema setup.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database, honouring the environment override.
    pub async fn init() -> Result<Self> {
        let url =
            std::env::var(DATABASE_URL_ENV).unwrap_or_else(|_| DATABASE_URL.to_string());
        info!("opening rental database at {url}");
        Self::new(&url).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                national_id TEXT NOT NULL UNIQUE,
                birth_date TEXT,
                active BOOLEAN NOT NULL DEFAULT 1
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                plate TEXT NOT NULL UNIQUE,
                insurance_policy TEXT NOT NULL,
                category TEXT NOT NULL,
                registration_date TEXT,
                active BOOLEAN NOT NULL DEFAULT 1
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rentals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_id INTEGER NOT NULL REFERENCES customers(id),
                vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                active BOOLEAN NOT NULL DEFAULT 1
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Index for the start-date-descending listing contract
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_rentals_start_date
            ON rentals(start_date DESC);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
