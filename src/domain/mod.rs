//! Domain layer: vehicles and the filter/sort engine.
//!
//! Everything here is pure and independent of the terminal front-end, the
//! catalog sources, and configuration.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`vehicle`]: The `Vehicle` record and vehicle classes
//! - [`filter`]: `FilterState`, its predicates, and `filter_vehicles`
//! - [`sort`]: Transient sort actions
//!
//! # Examples
//!
//! ```
//! use rideboard::domain::{filter_vehicles, FilterState, SortOrder};
//! use rideboard::catalog::sample_vehicles;
//!
//! let mut filters = FilterState::default();
//! filters.set_price_range(0.0, 30.0)?;
//!
//! let mut shown = filter_vehicles(&sample_vehicles(), &filters);
//! SortOrder::PriceAscending.apply(&mut shown);
//! assert_eq!(shown[0].name, "Economy Compact");
//! # Ok::<(), rideboard::RideboardError>(())
//! ```

pub mod error;
pub mod filter;
pub mod sort;
pub mod vehicle;

pub use error::{RideboardError, Result};
pub use filter::{filter_vehicles, FilterDimension, FilterState, PriceRange, TypeFilter};
pub use sort::SortOrder;
pub use vehicle::{Vehicle, VehicleType};
