//! Completed-rental record sink.
//!
//! Appends one human-readable, pipe-delimited line per completed rental to a
//! plain text file. The line shape is consumed by existing log tooling and
//! must stay stable:
//!
//! ```text
//! 2024-02-01 10:30:00 | Cliente: María González López (DNI: 12345678A) | Vehiculo: 1234ABC | Inicio: 2024-02-01 | Fin: 2024-02-08 | Dias: 7
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use super::models::Rental;
use super::rules;

const DEFAULT_LOG_FILE: &str = "alquileres.txt";

/// Appends formatted rental records to a text file.
#[derive(Debug, Clone)]
pub struct RentalLog {
    path: PathBuf,
}

impl RentalLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log writing to the conventional file name in the working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }

    /// Append one record for a completed rental.
    pub fn append(&self, rental: &Rental) -> Result<()> {
        let line = format_rental_line(rental, Local::now());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening rental log {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("writing rental log {}", self.path.display()))?;
        debug!("appended rental record to {}", self.path.display());
        Ok(())
    }
}

/// Render one rental as a log line. Pure, so the exact shape is testable
/// without touching the filesystem.
pub fn format_rental_line(rental: &Rental, timestamp: DateTime<Local>) -> String {
    format!(
        "{} | Cliente: {} {} (DNI: {}) | Vehiculo: {} | Inicio: {} | Fin: {} | Dias: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        rental.customer.first_name,
        rental.customer.last_name,
        rental.customer.national_id,
        rental.vehicle.plate,
        fmt_date(rental.start_date),
        fmt_date(rental.end_date),
        rules::duration_days(rental),
    )
}

/// ISO-8601 rendering; a dash for a date that was never set.
fn fmt_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
