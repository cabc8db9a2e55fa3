//! Vehicle domain model.
//!
//! A [`Vehicle`] is one bookable ride option shown in the listing. Records are
//! treated as immutable values for the duration of a filtering pass; the listing
//! never edits them, it only selects and reorders them.

use crate::domain::error::{RideboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest rating a vehicle can carry.
pub const MAX_RATING: f64 = 5.0;

/// Vehicle class. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Economy,
    Standard,
    Premium,
    Luxury,
}

impl VehicleType {
    /// All vehicle types in display order.
    pub const ALL: [Self; 4] = [Self::Economy, Self::Standard, Self::Premium, Self::Luxury];

    /// Lower-case wire name, as used in catalogs and commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    /// Capitalized name for labels ("Economy", "Luxury", ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = RideboardError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| RideboardError::UnknownVehicleType(s.to_string()))
    }
}

/// A bookable vehicle.
///
/// Field names serialize the way catalog files spell them (`arrivalTime`,
/// `type`). Extra fields in a catalog entry, such as an image URL, are ignored.
///
/// # Examples
///
/// ```
/// use rideboard::domain::{Vehicle, VehicleType};
///
/// let json = r#"{"id":"1","name":"Economy Sedan","price":25,"capacity":4,
///                "rating":4.2,"arrivalTime":8,"type":"economy"}"#;
/// let vehicle: Vehicle = serde_json::from_str(json).unwrap();
/// assert_eq!(vehicle.vehicle_type, VehicleType::Economy);
/// assert_eq!(vehicle.arrival_time, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub capacity: u32,
    pub rating: f64,
    /// Minutes until pickup.
    pub arrival_time: u32,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    /// Creates a vehicle record. No validation is performed; see [`Vehicle::validate`].
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vehicle_type: VehicleType,
        price: f64,
        capacity: u32,
        rating: f64,
        arrival_time: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            capacity,
            rating,
            arrival_time,
            vehicle_type,
        }
    }

    /// Checks the record invariants: non-negative finite price, at least one
    /// seat, rating within `[0, 5]`.
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::Catalog`] naming the offending vehicle.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RideboardError::Catalog(format!(
                "vehicle '{}' has an empty id",
                self.name
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(RideboardError::Catalog(format!(
                "vehicle {} has invalid price {}",
                self.id, self.price
            )));
        }
        if self.capacity == 0 {
            return Err(RideboardError::Catalog(format!(
                "vehicle {} has zero capacity",
                self.id
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(RideboardError::Catalog(format!(
                "vehicle {} has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }

    /// Fare label as shown on a card, e.g. `$25/ride`.
    #[must_use]
    pub fn fare_label(&self) -> String {
        format!("${}/ride", format_amount(self.price))
    }
}

/// Formats a numeric amount without a trailing `.0` for whole values.
///
/// ```
/// use rideboard::domain::vehicle::format_amount;
///
/// assert_eq!(format_amount(25.0), "25");
/// assert_eq!(format_amount(12.5), "12.5");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_parses_case_insensitively() {
        assert_eq!("Luxury".parse::<VehicleType>().unwrap(), VehicleType::Luxury);
        assert_eq!(" economy ".parse::<VehicleType>().unwrap(), VehicleType::Economy);
    }

    #[test]
    fn vehicle_type_rejects_unknown_names() {
        let err = "sedan".parse::<VehicleType>().unwrap_err();
        assert!(matches!(err, RideboardError::UnknownVehicleType(name) if name == "sedan"));
    }

    #[test]
    fn deserialize_ignores_image_field() {
        let json = r#"{"id":"4","name":"Luxury SUV","image":"https://example.invalid/suv.jpg",
            "price":75,"capacity":6,"rating":4.9,"arrivalTime":15,"type":"luxury"}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.name, "Luxury SUV");
        assert_eq!(vehicle.capacity, 6);
        assert!((vehicle.price - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serialize_uses_catalog_field_names() {
        let vehicle = Vehicle::new("9", "Test Van", VehicleType::Standard, 30.0, 7, 4.1, 12);
        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(value["arrivalTime"], 12);
        assert_eq!(value["type"], "standard");
    }

    #[test]
    fn validate_rejects_bad_records() {
        let mut vehicle = Vehicle::new("1", "Sedan", VehicleType::Economy, 25.0, 4, 4.2, 8);
        assert!(vehicle.validate().is_ok());

        vehicle.rating = 5.5;
        assert!(matches!(vehicle.validate(), Err(RideboardError::Catalog(_))));

        vehicle.rating = 4.0;
        vehicle.capacity = 0;
        assert!(vehicle.validate().is_err());

        vehicle.capacity = 2;
        vehicle.price = -1.0;
        assert!(vehicle.validate().is_err());
    }

    #[test]
    fn fare_label_drops_whole_number_fraction() {
        let vehicle = Vehicle::new("1", "Sedan", VehicleType::Economy, 25.0, 4, 4.2, 8);
        assert_eq!(vehicle.fare_label(), "$25/ride");
    }
}
