use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size category of a vehicle.
///
/// A closed set of named values so that invalid categories can never reach
/// persistence. Stored as its canonical lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Small,
    Medium,
    Large,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Small,
        VehicleCategory::Medium,
        VehicleCategory::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Small => "small",
            VehicleCategory::Medium => "medium",
            VehicleCategory::Large => "large",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(VehicleCategory::Small),
            "medium" => Ok(VehicleCategory::Medium),
            "large" => Ok(VehicleCategory::Large),
            other => Err(anyhow::anyhow!("unknown vehicle category: {other}")),
        }
    }
}

/// Domain model representing a vehicle in the fleet.
///
/// The license plate is the unique business key, enforced by the persistence
/// layer. The identifier is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Option<i64>,
    pub plate: String,
    pub insurance_policy: String,
    pub category: VehicleCategory,
    pub registration_date: Option<NaiveDate>,
    pub active: bool,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        insurance_policy: impl Into<String>,
        category: VehicleCategory,
        registration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            plate: plate.into(),
            insurance_policy: insurance_policy.into(),
            category,
            registration_date,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_canonical_string() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.as_str().parse::<VehicleCategory>().unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_unknown_strings() {
        assert!("van".parse::<VehicleCategory>().is_err());
        assert!("Small".parse::<VehicleCategory>().is_err());
        assert!("".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn category_serializes_to_canonical_string() {
        assert_eq!(
            serde_json::to_string(&VehicleCategory::Small).unwrap(),
            "\"small\""
        );
        assert_eq!(
            serde_json::from_str::<VehicleCategory>("\"large\"").unwrap(),
            VehicleCategory::Large
        );
    }

    #[test]
    fn vehicle_json_field_list_is_stable() {
        let vehicle = Vehicle::new(
            "1234ABC",
            "POL-1",
            VehicleCategory::Medium,
            NaiveDate::from_ymd_opt(2020, 1, 10),
        );
        let json = serde_json::to_value(&vehicle).unwrap();
        let mut fields: Vec<&str> =
            json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            vec![
                "active",
                "category",
                "id",
                "insurance_policy",
                "plate",
                "registration_date"
            ]
        );
        assert_eq!(json["category"], "medium");
        assert_eq!(json["registration_date"], "2020-01-10");
    }
}
