//! Actions representing side effects to be executed by the front-end runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! are the boundary between pure state transitions and whatever the host does
//! with them: the CLI prints a booking hand-off line or ends the session.

use crate::domain::Vehicle;
use chrono::{DateTime, Utc};

/// Hand-off to the booking-initiation collaborator.
///
/// Carries the chosen vehicle's identity and the fare shown at selection time.
/// Nothing is reserved or persisted by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub fare: f64,
    pub requested_at: DateTime<Utc>,
}

impl BookingRequest {
    #[must_use]
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            vehicle_name: vehicle.name.clone(),
            fare: vehicle.price,
            requested_at: Utc::now(),
        }
    }
}

/// Commands for the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Forward a vehicle selection to the booking collaborator.
    InitiateBooking(BookingRequest),

    /// End the listing session.
    Quit,
}
