//! Error types for Rideboard.
//!
//! This module defines the centralized error type [`RideboardError`] and a type alias
//! [`Result`] used throughout the crate. The filter engine itself cannot fail; errors
//! only arise at its edges: programmatic filter input, catalog loading, configuration,
//! themes, and the interactive command parser.

use thiserror::Error;

/// The main error type for Rideboard operations.
///
/// # Examples
///
/// ```
/// use rideboard::RideboardError;
///
/// fn check_rating(rating: f64) -> Result<(), RideboardError> {
///     if rating > 5.0 {
///         return Err(RideboardError::InvalidFilter(format!("rating {rating} exceeds 5")));
///     }
///     Ok(())
/// }
///
/// assert!(check_rating(6.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum RideboardError {
    /// A filter value is outside its allowed domain.
    ///
    /// Raised by the `FilterState` setters: price bounds outside `[0, 100]` or
    /// inverted, rating outside `[0, 5]`, or a non-finite number.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A vehicle type name is not one of economy, standard, premium, luxury
    /// (or `all` where a type filter is expected).
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    /// A sort order name could not be parsed.
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// An interactive command could not be parsed.
    #[error("Command error: {0}")]
    Command(String),

    /// A vehicle catalog could not be parsed or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Rideboard operations.
pub type Result<T> = std::result::Result<T, RideboardError>;
