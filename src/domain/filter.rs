//! Filter state and the conjunctive vehicle predicate.
//!
//! [`FilterState`] is the four-dimensional constraint applied to the vehicle
//! collection: price range, vehicle type, maximum arrival time, minimum rating.
//! A vehicle is displayed only when it passes all four predicates.
//!
//! The setters validate their input and leave the state untouched on error, so a
//! `FilterState` value is always within its domain.
//!
//! # Example
//!
//! ```
//! use rideboard::domain::{filter_vehicles, FilterState, TypeFilter, VehicleType};
//! use rideboard::catalog::sample_vehicles;
//!
//! let mut filters = FilterState::default();
//! filters.set_vehicle_type(TypeFilter::Only(VehicleType::Luxury));
//!
//! let names: Vec<_> = filter_vehicles(&sample_vehicles(), &filters)
//!     .into_iter()
//!     .map(|v| v.name)
//!     .collect();
//! assert_eq!(names, ["Luxury SUV", "Luxury Limousine"]);
//! ```

use crate::domain::error::{RideboardError, Result};
use crate::domain::vehicle::{format_amount, Vehicle, VehicleType, MAX_RATING};
use std::fmt;
use std::str::FromStr;

/// Lowest selectable fare.
pub const PRICE_FLOOR: f64 = 0.0;

/// Highest selectable fare.
pub const PRICE_CEILING: f64 = 100.0;

/// Default maximum arrival time in minutes.
pub const DEFAULT_MAX_ARRIVAL_MINUTES: u32 = 30;

/// Default minimum rating.
pub const DEFAULT_MIN_RATING: f64 = 0.0;

/// Inclusive fare range with `PRICE_FLOOR <= min <= max <= PRICE_CEILING`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// The full range `[0, 100]`.
    pub const FULL: Self = Self {
        min: PRICE_FLOOR,
        max: PRICE_CEILING,
    };

    /// Builds a range, rejecting inverted, out-of-bounds or non-finite bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::InvalidFilter`] describing the violated bound.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RideboardError::InvalidFilter(format!(
                "price bounds must be finite, got {min} - {max}"
            )));
        }
        if min < PRICE_FLOOR || min > PRICE_CEILING || max < PRICE_FLOOR || max > PRICE_CEILING {
            return Err(RideboardError::InvalidFilter(format!(
                "price range {min} - {max} outside {PRICE_FLOOR} - {PRICE_CEILING}"
            )));
        }
        if min > max {
            return Err(RideboardError::InvalidFilter(format!(
                "price minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive membership test.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", format_amount(self.min), format_amount(self.max))
    }
}

/// Vehicle type selection: the `all` wildcard or one exact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(VehicleType),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, vehicle_type: VehicleType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == vehicle_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(t) => t.fmt(f),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = RideboardError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// One independently resettable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Price,
    Type,
    Arrival,
    Rating,
}

impl FilterDimension {
    pub const ALL: [Self; 4] = [Self::Type, Self::Price, Self::Arrival, Self::Rating];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Type => "type",
            Self::Arrival => "arrival",
            Self::Rating => "rating",
        }
    }
}

impl FromStr for FilterDimension {
    type Err = RideboardError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| RideboardError::Command(format!("unknown filter '{s}'")))
    }
}

/// The constraint currently applied to the vehicle collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    price_range: PriceRange,
    vehicle_type: TypeFilter,
    max_arrival_time: u32,
    min_rating: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: PriceRange::FULL,
            vehicle_type: TypeFilter::All,
            max_arrival_time: DEFAULT_MAX_ARRIVAL_MINUTES,
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl FilterState {
    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    #[must_use]
    pub const fn vehicle_type(&self) -> TypeFilter {
        self.vehicle_type
    }

    #[must_use]
    pub const fn max_arrival_time(&self) -> u32 {
        self.max_arrival_time
    }

    #[must_use]
    pub const fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Sets the inclusive price range.
    ///
    /// # Errors
    ///
    /// See [`PriceRange::new`]. The state is unchanged on error.
    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.price_range = PriceRange::new(min, max)?;
        Ok(())
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: TypeFilter) {
        self.vehicle_type = vehicle_type;
    }

    /// Sets the inclusive upper bound on arrival minutes. Any `u32` is accepted.
    pub fn set_max_arrival_time(&mut self, minutes: u32) {
        self.max_arrival_time = minutes;
    }

    /// Sets the inclusive lower bound on rating.
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::InvalidFilter`] unless `0 <= rating <= 5`.
    pub fn set_min_rating(&mut self, rating: f64) -> Result<()> {
        if !(DEFAULT_MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(RideboardError::InvalidFilter(format!(
                "minimum rating {rating} outside 0 - {MAX_RATING}"
            )));
        }
        self.min_rating = rating;
        Ok(())
    }

    /// Restores every dimension to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Restores a single dimension to its default, leaving the others alone.
    pub fn reset_dimension(&mut self, dimension: FilterDimension) {
        let defaults = Self::default();
        match dimension {
            FilterDimension::Price => self.price_range = defaults.price_range,
            FilterDimension::Type => self.vehicle_type = defaults.vehicle_type,
            FilterDimension::Arrival => self.max_arrival_time = defaults.max_arrival_time,
            FilterDimension::Rating => self.min_rating = defaults.min_rating,
        }
    }

    /// Whether `dimension` differs from its default.
    #[must_use]
    pub fn is_active(&self, dimension: FilterDimension) -> bool {
        let defaults = Self::default();
        match dimension {
            FilterDimension::Price => self.price_range != defaults.price_range,
            FilterDimension::Type => self.vehicle_type != defaults.vehicle_type,
            FilterDimension::Arrival => self.max_arrival_time != defaults.max_arrival_time,
            FilterDimension::Rating => self.min_rating != defaults.min_rating,
        }
    }

    /// Dimensions that currently differ from their defaults, in badge order.
    #[must_use]
    pub fn active_dimensions(&self) -> Vec<FilterDimension> {
        FilterDimension::ALL
            .into_iter()
            .filter(|d| self.is_active(*d))
            .collect()
    }

    /// Conjunction of the four predicates.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.price_range.contains(vehicle.price)
            && self.vehicle_type.matches(vehicle.vehicle_type)
            && vehicle.arrival_time <= self.max_arrival_time
            && vehicle.rating >= self.min_rating
    }
}

/// Returns the vehicles passing `filters`, in source order.
///
/// Always a full recomputation from `vehicles`; no state is carried between calls.
#[must_use]
pub fn filter_vehicles(vehicles: &[Vehicle], filters: &FilterState) -> Vec<Vehicle> {
    let _span = tracing::debug_span!(
        "filter_vehicles",
        total = vehicles.len(),
        price = %filters.price_range(),
        vehicle_type = %filters.vehicle_type(),
        max_arrival = filters.max_arrival_time(),
        min_rating = filters.min_rating()
    )
    .entered();

    let filtered: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| filters.matches(v))
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "vehicles filtered");
    filtered
}
