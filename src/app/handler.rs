//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which user interactions
//! reach the listing. It mutates [`AppState`] and returns whether the view needs
//! re-rendering plus any [`Action`]s for the runtime.
//!
//! # Event Types
//!
//! - **Filters**: `SetPriceRange`, `SetVehicleType`, `SetMaxArrivalTime`,
//!   `SetMinRating`, `RemoveBadge`, `ResetFilters`
//! - **Ordering**: `Sort`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Selection**: `SelectVehicle`, `SelectVehicleId`
//! - **Input**: `CatalogLoaded`
//! - **Lifecycle**: `Quit`
//!
//! # Example
//!
//! ```rust
//! use rideboard::app::{handle_event, AppState, Event};
//! use rideboard::catalog::sample_vehicles;
//! use rideboard::domain::{TypeFilter, VehicleType};
//! use rideboard::ui::Theme;
//!
//! let mut state = AppState::new(sample_vehicles(), Theme::default());
//! let event = Event::SetVehicleType(TypeFilter::Only(VehicleType::Luxury));
//! let (rerender, actions) = handle_event(&mut state, &event)?;
//! assert!(rerender);
//! assert!(actions.is_empty());
//! assert_eq!(state.filtered_vehicles.len(), 2);
//! # Ok::<(), rideboard::RideboardError>(())
//! ```

use crate::app::actions::BookingRequest;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FilterDimension, SortOrder, TypeFilter, Vehicle};

/// Interactions with the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Sets the inclusive fare range.
    SetPriceRange { min: f64, max: f64 },
    /// Sets the vehicle type selection.
    SetVehicleType(TypeFilter),
    /// Sets the inclusive upper bound on arrival minutes.
    SetMaxArrivalTime(u32),
    /// Sets the inclusive lower bound on rating.
    SetMinRating(f64),
    /// Resets one filter dimension (removing its badge).
    RemoveBadge(FilterDimension),
    /// Restores all filters to defaults.
    ResetFilters,
    /// Reorders the displayed list once.
    Sort(SortOrder),
    /// Moves the highlight down (wraps to top).
    KeyDown,
    /// Moves the highlight up (wraps to bottom).
    KeyUp,
    /// Books the highlighted vehicle.
    SelectVehicle,
    /// Books a displayed vehicle by id.
    SelectVehicleId(String),
    /// Replaces the source collection.
    CatalogLoaded(Vec<Vehicle>),
    /// Ends the session.
    Quit,
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// # Errors
///
/// Returns the validation error of a rejected filter value. The state is left
/// unchanged in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetPriceRange { min, max } => {
            let changed = state.update_filters(|f| f.set_price_range(*min, *max))?;
            Ok((changed, vec![]))
        }
        Event::SetVehicleType(selection) => {
            let changed = state.update_filters(|f| {
                f.set_vehicle_type(*selection);
                Ok(())
            })?;
            Ok((changed, vec![]))
        }
        Event::SetMaxArrivalTime(minutes) => {
            let changed = state.update_filters(|f| {
                f.set_max_arrival_time(*minutes);
                Ok(())
            })?;
            Ok((changed, vec![]))
        }
        Event::SetMinRating(rating) => {
            let changed = state.update_filters(|f| f.set_min_rating(*rating))?;
            Ok((changed, vec![]))
        }
        Event::RemoveBadge(dimension) => {
            tracing::debug!(dimension = dimension.as_str(), "removing filter badge");
            let changed = state.update_filters(|f| {
                f.reset_dimension(*dimension);
                Ok(())
            })?;
            Ok((changed, vec![]))
        }
        Event::ResetFilters => {
            tracing::debug!("resetting filters");
            state.reset_filters();
            Ok((true, vec![]))
        }
        Event::Sort(order) => {
            state.sort_by(*order);
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SelectVehicle => {
            let Some(vehicle) = state.selected_vehicle() else {
                tracing::debug!("no vehicle selected");
                return Ok((false, vec![]));
            };
            Ok((false, vec![book(vehicle)]))
        }
        Event::SelectVehicleId(id) => {
            let Some(vehicle) = state.displayed_vehicle(id) else {
                tracing::debug!(vehicle_id = %id, "vehicle not displayed, ignoring selection");
                return Ok((false, vec![]));
            };
            Ok((false, vec![book(vehicle)]))
        }
        Event::CatalogLoaded(vehicles) => {
            if &state.vehicles == vehicles {
                tracing::debug!("catalog unchanged, skipping recompute");
                return Ok((false, vec![]));
            }
            tracing::debug!(count = vehicles.len(), "catalog replaced");
            state.replace_vehicles(vehicles.clone());
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

fn book(vehicle: &Vehicle) -> Action {
    tracing::debug!(
        vehicle_id = %vehicle.id,
        vehicle_name = %vehicle.name,
        fare = vehicle.price,
        "vehicle selected"
    );
    Action::InitiateBooking(BookingRequest::for_vehicle(vehicle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_vehicles;
    use crate::domain::{RideboardError, VehicleType};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(sample_vehicles(), Theme::default())
    }

    fn booked_id(actions: &[Action]) -> Option<&str> {
        match actions {
            [Action::InitiateBooking(request)] => Some(request.vehicle_id.as_str()),
            _ => None,
        }
    }

    #[test]
    fn filter_events_recompute() {
        let mut state = state();

        let (rerender, _) =
            handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 30.0 }).unwrap();
        assert!(rerender);
        assert_eq!(state.filtered_vehicles.len(), 2);

        handle_event(&mut state, &Event::SetMinRating(4.1)).unwrap();
        assert_eq!(state.filtered_vehicles.len(), 1);
        assert_eq!(state.filtered_vehicles[0].name, "Economy Sedan");
    }

    #[test]
    fn repeated_value_does_not_rerender() {
        let mut state = state();
        let (rerender, _) = handle_event(&mut state, &Event::SetMaxArrivalTime(30)).unwrap();
        assert!(!rerender);
    }

    #[test]
    fn invalid_value_is_an_error() {
        let mut state = state();
        let err = handle_event(&mut state, &Event::SetMinRating(9.0)).unwrap_err();
        assert!(matches!(err, RideboardError::InvalidFilter(_)));
        assert_eq!(state.filtered_vehicles.len(), 8);
    }

    #[test]
    fn removing_badge_resets_only_that_dimension() {
        let mut state = state();
        handle_event(&mut state, &Event::SetVehicleType(TypeFilter::Only(VehicleType::Economy)))
            .unwrap();
        handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 22.0 }).unwrap();
        assert_eq!(state.filtered_vehicles.len(), 1);

        handle_event(&mut state, &Event::RemoveBadge(FilterDimension::Type)).unwrap();
        assert_eq!(state.filters.vehicle_type(), TypeFilter::All);
        assert_eq!(state.filters.active_dimensions(), [FilterDimension::Price]);
        assert_eq!(state.filtered_vehicles.len(), 1);
        assert_eq!(state.filtered_vehicles[0].name, "Economy Compact");
    }

    #[test]
    fn sort_then_filter_returns_to_source_order() {
        let mut state = state();
        handle_event(&mut state, &Event::Sort(SortOrder::PriceAscending)).unwrap();
        assert_eq!(state.filtered_vehicles[0].id, "5");

        handle_event(&mut state, &Event::SetMaxArrivalTime(20)).unwrap();
        let ids: Vec<_> = state.filtered_vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn select_books_highlighted_vehicle() {
        let mut state = state();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (rerender, actions) = handle_event(&mut state, &Event::SelectVehicle).unwrap();
        assert!(!rerender);
        assert_eq!(booked_id(&actions), Some("2"));

        match &actions[0] {
            Action::InitiateBooking(request) => {
                assert_eq!(request.vehicle_name, "Standard SUV");
                assert!((request.fare - 35.0).abs() < f64::EPSILON);
            }
            Action::Quit => panic!("expected booking"),
        }
    }

    #[test]
    fn select_by_id_only_sees_displayed_vehicles() {
        let mut state = state();
        handle_event(&mut state, &Event::SetVehicleType(TypeFilter::Only(VehicleType::Luxury)))
            .unwrap();

        let (_, actions) =
            handle_event(&mut state, &Event::SelectVehicleId("8".to_string())).unwrap();
        assert_eq!(booked_id(&actions), Some("8"));

        let (_, actions) =
            handle_event(&mut state, &Event::SelectVehicleId("1".to_string())).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn select_on_empty_list_does_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 10.0 }).unwrap();
        let (rerender, actions) = handle_event(&mut state, &Event::SelectVehicle).unwrap();
        assert!(!rerender);
        assert!(actions.is_empty());
    }

    #[test]
    fn catalog_loaded_replaces_source() {
        let mut state = state();
        let fleet: Vec<Vehicle> = sample_vehicles().into_iter().take(3).collect();

        let (rerender, _) = handle_event(&mut state, &Event::CatalogLoaded(fleet.clone())).unwrap();
        assert!(rerender);
        assert_eq!(state.filtered_vehicles, fleet);

        let (rerender, _) = handle_event(&mut state, &Event::CatalogLoaded(fleet)).unwrap();
        assert!(!rerender);
    }

    #[test]
    fn quit_emits_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
