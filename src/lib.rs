//! Rideboard: the vehicle listing engine of a ride-booking front-end.
//!
//! Given a catalog of bookable vehicles, Rideboard keeps the subset matching
//! the rider's filter choices (price range, vehicle class, arrival time,
//! minimum rating), lets the rider reorder it, and hands the chosen vehicle
//! off to booking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI front-end (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Listing state
//! │  - Event handling                                   │
//! │  - Command parsing                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Domain Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (domain/)     │
//! │ - Rendering   │   │ - Sample set  │   │ - Vehicles    │
//! │ - Theming     │   │ - JSON files  │   │ - Filters     │
//! │ - Components  │   │ - Validation  │   │ - Sorting     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - tracing subscriber, OTLP file export             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Listing state with the event/action model
//! - [`catalog`]: Where the vehicle collection comes from
//! - [`domain`]: Vehicles, the filter engine, sort orders, errors
//! - [`infrastructure`]: Platform-specific paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Settings are read from `<config dir>/rideboard/config.toml` (or the file
//! given with `--config`); command-line flags override them.
//!
//! ```toml
//! catalog = "~/rides/vehicles.json"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! trace_export = false
//! rows = 24
//! ```
//!
//! # Example
//!
//! ```rust
//! use rideboard::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! assert_eq!(state.filtered_vehicles.len(), 8);
//!
//! handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 30.0 })?;
//! assert_eq!(state.filtered_vehicles.len(), 2);
//!
//! let (_, actions) = handle_event(&mut state, &Event::SelectVehicle)?;
//! assert!(matches!(actions[0], Action::InitiateBooking(_)));
//! # Ok::<(), rideboard::RideboardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, parse_command, Action, AppState, BookingRequest, Event};
pub use domain::{
    FilterDimension, FilterState, PriceRange, Result, RideboardError, SortOrder, TypeFilter,
    Vehicle, VehicleType,
};
pub use ui::Theme;

use infrastructure::{default_config_file, expand_tilde};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Loaded from TOML; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON catalog to list. The built-in sample set is used when unset.
    pub catalog: Option<PathBuf>,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `rideboard=trace`.
    ///
    /// `RUST_LOG` wins when set. Default: `warn`.
    pub trace_level: Option<String>,

    /// Export spans as OTLP JSON to the data directory.
    pub trace_export: bool,

    /// Terminal height used by `browse`.
    pub rows: Option<usize>,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// ```rust
    /// use rideboard::Config;
    ///
    /// let config = Config::from_toml_str("theme = \"catppuccin-latte\"\nrows = 30")?;
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.rows, Some(30));
    /// assert!(!config.trace_export);
    /// # Ok::<(), rideboard::RideboardError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| RideboardError::Config(e.to_string()))?;
        config.catalog = config.catalog.map(expand_tilde);
        config.theme_file = config.theme_file.map(expand_tilde);
        Ok(config)
    }

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default config file is
    /// read if present; otherwise defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`RideboardError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => expand_tilde(path),
            None => match default_config_file().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            RideboardError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
            .map_err(|e| RideboardError::Config(format!("{}: {e}", path.display())))
    }
}

/// Builds the listing state for `config`.
///
/// The theme is resolved from `theme_file`, then `theme_name`, then the
/// default; a theme that fails to load falls back to the default. The catalog
/// is loaded and validated, and the initial list is computed under default
/// filters.
///
/// # Errors
///
/// Propagates catalog loading and validation errors.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing rideboard");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let source = catalog::source_for(config.catalog.as_deref());
    let vehicles = source.load()?;
    tracing::debug!(source = %source.describe(), count = vehicles.len(), "catalog loaded");

    Ok(AppState::new(vehicles, theme))
}
