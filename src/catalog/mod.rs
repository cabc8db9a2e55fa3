//! Vehicle catalog sources.
//!
//! The listing's input collection comes from a [`VehicleSource`]: the built-in
//! [`SampleCatalog`] when nothing else is configured, or a [`JsonCatalog`] file.

pub mod json;
pub mod sample;
pub mod source;

pub use json::JsonCatalog;
pub use sample::{sample_vehicles, SampleCatalog};
pub use source::{validate_catalog, VehicleSource};

use std::path::Path;

/// Picks the source for an optional catalog path.
#[must_use]
pub fn source_for(path: Option<&Path>) -> Box<dyn VehicleSource> {
    match path {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(SampleCatalog),
    }
}
