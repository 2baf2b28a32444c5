use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a customer of the rental business.
///
/// The national-ID string (DNI) is the unique business key; uniqueness is
/// enforced by the persistence layer, not by this entity. The identifier is
/// assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub birth_date: Option<NaiveDate>,
    pub active: bool,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
            birth_date,
            active: true,
        }
    }

    /// Display name, e.g. "María González López (12345678A)".
    pub fn display_name(&self) -> String {
        format!(
            "{} {} ({})",
            self.first_name, self.last_name, self.national_id
        )
    }
}
