//! JSON catalog files.
//!
//! Two layouts are accepted: a bare array of vehicles, or a versioned container.
//!
//! ```json
//! {
//!   "version": 1,
//!   "vehicles": [
//!     { "id": "1", "name": "Economy Sedan", "price": 25, "capacity": 4,
//!       "rating": 4.2, "arrivalTime": 8, "type": "economy" }
//!   ]
//! }
//! ```
//!
//! Catalog files are read-only input; nothing is ever written back.

use crate::catalog::source::{validate_catalog, VehicleSource};
use crate::domain::error::{RideboardError, Result};
use crate::domain::Vehicle;
use serde::Deserialize;
use std::path::PathBuf;

/// Highest catalog format version this build understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Versioned {
        version: u32,
        vehicles: Vec<Vehicle>,
    },
    Bare(Vec<Vehicle>),
}

/// [`VehicleSource`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Parses and validates catalog text.
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::Catalog`] for malformed JSON, an unsupported
    /// version, or records failing validation.
    pub fn parse(contents: &str) -> Result<Vec<Vehicle>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| RideboardError::Catalog(format!("failed to parse JSON: {e}")))?;

        let vehicles = match file {
            CatalogFile::Versioned { version, vehicles } => {
                if version > SUPPORTED_VERSION {
                    return Err(RideboardError::Catalog(format!(
                        "unsupported catalog version {version}"
                    )));
                }
                vehicles
            }
            CatalogFile::Bare(vehicles) => vehicles,
        };

        validate_catalog(&vehicles)?;
        Ok(vehicles)
    }
}

impl VehicleSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Vehicle>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let vehicles = Self::parse(&contents)?;

        tracing::debug!(count = vehicles.len(), "catalog loaded");
        Ok(vehicles)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.file_path.display())
    }
}
