//! Built-in sample fleet shown when no catalog is supplied.

use crate::catalog::source::VehicleSource;
use crate::domain::error::Result;
use crate::domain::{Vehicle, VehicleType};

/// The eight sample vehicles, in listing order.
#[must_use]
pub fn sample_vehicles() -> Vec<Vehicle> {
    use VehicleType::{Economy, Luxury, Premium, Standard};

    vec![
        Vehicle::new("1", "Economy Sedan", Economy, 25.0, 4, 4.2, 8),
        Vehicle::new("2", "Standard SUV", Standard, 35.0, 5, 4.5, 12),
        Vehicle::new("3", "Premium Sedan", Premium, 50.0, 4, 4.8, 10),
        Vehicle::new("4", "Luxury SUV", Luxury, 75.0, 6, 4.9, 15),
        Vehicle::new("5", "Economy Compact", Economy, 20.0, 2, 4.0, 5),
        Vehicle::new("6", "Standard Minivan", Standard, 45.0, 7, 4.3, 18),
        Vehicle::new("7", "Premium Electric", Premium, 65.0, 5, 4.7, 14),
        Vehicle::new("8", "Luxury Limousine", Luxury, 95.0, 8, 5.0, 25),
    ]
}

/// [`VehicleSource`] serving [`sample_vehicles`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl VehicleSource for SampleCatalog {
    fn load(&self) -> Result<Vec<Vehicle>> {
        Ok(sample_vehicles())
    }

    fn describe(&self) -> String {
        "built-in sample fleet".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::validate_catalog;
    use std::collections::HashSet;

    #[test]
    fn sample_fleet_is_valid_and_unique() {
        let vehicles = sample_vehicles();
        assert_eq!(vehicles.len(), 8);
        validate_catalog(&vehicles).unwrap();

        let ids: HashSet<_> = vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn sample_prices_cover_listing_range() {
        let mut prices: Vec<f64> = sample_vehicles().iter().map(|v| v.price).collect();
        prices.sort_by(f64::total_cmp);
        assert_eq!(prices, [20.0, 25.0, 35.0, 45.0, 50.0, 65.0, 75.0, 95.0]);
    }
}
