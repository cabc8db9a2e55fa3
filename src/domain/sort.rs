//! One-shot sort actions over the displayed vehicle list.
//!
//! A [`SortOrder`] is not part of the filter state. Applying one reorders the
//! current list in place; the next filter recomputation starts again from source
//! order. All orders are stable, so ties keep their relative position.

use crate::domain::error::{RideboardError, Result};
use crate::domain::vehicle::Vehicle;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The four sort actions offered by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Price: low to high.
    PriceAscending,
    /// Price: high to low.
    PriceDescending,
    /// Fastest arrival first.
    ArrivalAscending,
    /// Highest rated first.
    RatingDescending,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [
        Self::PriceAscending,
        Self::PriceDescending,
        Self::ArrivalAscending,
        Self::RatingDescending,
    ];

    /// Command name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::ArrivalAscending => "arrival",
            Self::RatingDescending => "rating",
        }
    }

    /// Button label as shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::ArrivalAscending => "Fastest Arrival",
            Self::RatingDescending => "Highest Rated",
        }
    }

    /// Comparator for this order. Float fields use `total_cmp`.
    #[must_use]
    pub fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            Self::PriceAscending => a.price.total_cmp(&b.price),
            Self::PriceDescending => b.price.total_cmp(&a.price),
            Self::ArrivalAscending => a.arrival_time.cmp(&b.arrival_time),
            Self::RatingDescending => b.rating.total_cmp(&a.rating),
        }
    }

    /// Stable in-place sort.
    pub fn apply(self, vehicles: &mut [Vehicle]) {
        let _span =
            tracing::debug_span!("sort_vehicles", order = self.as_str(), count = vehicles.len())
                .entered();
        vehicles.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = RideboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-asc" | "price" | "cheapest" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "arrival" | "fastest" => Ok(Self::ArrivalAscending),
            "rating" | "rated" => Ok(Self::RatingDescending),
            _ => Err(RideboardError::UnknownSortOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::VehicleType;

    fn priced(id: &str, price: f64) -> Vehicle {
        Vehicle::new(id, id, VehicleType::Standard, price, 4, 4.0, 10)
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn ascending_then_descending_reverses_without_ties() {
        let mut vehicles = vec![priced("a", 30.0), priced("b", 10.0), priced("c", 20.0)];

        SortOrder::PriceAscending.apply(&mut vehicles);
        let ascending: Vec<String> = vehicles.iter().map(|v| v.id.clone()).collect();
        SortOrder::PriceDescending.apply(&mut vehicles);
        let mut descending: Vec<String> = vehicles.iter().map(|v| v.id.clone()).collect();

        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(ascending, ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_original_relative_order() {
        let mut vehicles = vec![
            priced("first", 20.0),
            priced("cheap", 5.0),
            priced("second", 20.0),
            priced("third", 20.0),
        ];

        SortOrder::PriceAscending.apply(&mut vehicles);
        assert_eq!(ids(&vehicles), ["cheap", "first", "second", "third"]);

        SortOrder::PriceDescending.apply(&mut vehicles);
        assert_eq!(ids(&vehicles), ["first", "second", "third", "cheap"]);
    }

    #[test]
    fn arrival_and_rating_orders() {
        let mut vehicles = vec![
            Vehicle::new("slow", "Slow", VehicleType::Luxury, 95.0, 8, 5.0, 25),
            Vehicle::new("fast", "Fast", VehicleType::Economy, 20.0, 2, 4.0, 5),
            Vehicle::new("mid", "Mid", VehicleType::Premium, 50.0, 4, 4.8, 10),
        ];

        SortOrder::ArrivalAscending.apply(&mut vehicles);
        assert_eq!(ids(&vehicles), ["fast", "mid", "slow"]);

        SortOrder::RatingDescending.apply(&mut vehicles);
        assert_eq!(ids(&vehicles), ["slow", "mid", "fast"]);
    }

    #[test]
    fn parses_command_names_and_aliases() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
        assert_eq!("fastest".parse::<SortOrder>().unwrap(), SortOrder::ArrivalAscending);
        assert!(matches!(
            "distance".parse::<SortOrder>(),
            Err(RideboardError::UnknownSortOrder(_))
        ));
    }
}
