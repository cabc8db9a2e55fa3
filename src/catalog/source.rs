//! Vehicle source abstraction.
//!
//! The listing does not care where its vehicles come from. A [`VehicleSource`]
//! hands over an ordered collection once; that order becomes the listing's source
//! order, which every filter recomputation returns to.

use crate::domain::error::{RideboardError, Result};
use crate::domain::Vehicle;
use std::collections::HashSet;

/// Supplier of the listing's input collection.
///
/// # Implementations
///
/// - [`SampleCatalog`](crate::catalog::SampleCatalog): the fixed eight-vehicle fleet
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): a JSON catalog file
pub trait VehicleSource {
    /// Loads the full collection in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or fails validation.
    fn load(&self) -> Result<Vec<Vehicle>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Validates every record and checks that ids are unique.
///
/// # Errors
///
/// Returns [`RideboardError::Catalog`] for the first offending record.
pub fn validate_catalog(vehicles: &[Vehicle]) -> Result<()> {
    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        vehicle.validate()?;
        if !seen.insert(vehicle.id.as_str()) {
            return Err(RideboardError::Catalog(format!(
                "duplicate vehicle id {}",
                vehicle.id
            )));
        }
    }
    Ok(())
}
