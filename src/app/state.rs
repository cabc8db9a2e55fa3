//! Listing state and view model computation.
//!
//! [`AppState`] owns the source vehicle collection, the current [`FilterState`],
//! and the displayed list derived from them. It is the single source of truth for
//! one listing session and is discarded with it.
//!
//! # Derived list
//!
//! `filtered_vehicles` is always exactly the vehicles of `vehicles` that pass
//! every filter predicate. After [`AppState::apply_filters`] they are in source
//! order; a later [`AppState::sort_by`] reorders them until the next
//! recomputation. Sort choice is never replayed by a filter change.
//!
//! # Example
//!
//! ```rust
//! use rideboard::app::AppState;
//! use rideboard::catalog::sample_vehicles;
//! use rideboard::domain::SortOrder;
//! use rideboard::ui::Theme;
//!
//! let mut state = AppState::new(sample_vehicles(), Theme::default());
//! state.sort_by(SortOrder::PriceDescending);
//! assert_eq!(state.filtered_vehicles[0].name, "Luxury Limousine");
//!
//! state.update_filters(|f| f.set_price_range(0.0, 60.0))?;
//! assert_eq!(state.filtered_vehicles[0].name, "Economy Sedan");
//! # Ok::<(), rideboard::RideboardError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::vehicle::format_amount;
use crate::domain::{
    filter_vehicles, FilterDimension, FilterState, SortOrder, TypeFilter, Vehicle,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BadgeInfo, EmptyState, FilterSummary, FooterInfo, HeaderInfo, UIViewModel, VehicleCard,
};

/// Rows taken by everything except the card list: title, count, two borders,
/// filter summary, badges, column headers, bottom border, status, footer.
pub const CHROME_ROWS: usize = 10;

/// Width of the NAME column, including padding.
const NAME_COLUMN_WIDTH: usize = 22;

/// State of one listing session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source collection, in source order. Never reordered.
    pub vehicles: Vec<Vehicle>,

    /// Displayed list: the vehicles passing `filters`.
    ///
    /// Recomputed from `vehicles` on every filter change; reordered in place by
    /// sort actions.
    pub filtered_vehicles: Vec<Vehicle>,

    /// Current filter constraint.
    pub filters: FilterState,

    /// Sort applied since the last recomputation, if any. Display only.
    pub active_sort: Option<SortOrder>,

    /// Zero-based index of the highlighted row within `filtered_vehicles`.
    pub selected_index: usize,

    /// Result of the last interactive command, shown on the status line.
    pub status_message: Option<String>,

    pub theme: Theme,
}

impl AppState {
    /// Creates a session with default filters and computes the initial list.
    #[must_use]
    pub fn new(vehicles: Vec<Vehicle>, theme: Theme) -> Self {
        let mut state = Self {
            vehicles,
            filtered_vehicles: vec![],
            filters: FilterState::default(),
            active_sort: None,
            selected_index: 0,
            status_message: None,
            theme,
        };
        state.apply_filters();
        state
    }

    /// Moves the highlight down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_vehicles.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_vehicles.len();
    }

    /// Moves the highlight up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_vehicles.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_vehicles.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.filtered_vehicles.get(self.selected_index)
    }

    /// Looks up a displayed vehicle by id. Hidden vehicles are not selectable.
    #[must_use]
    pub fn displayed_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.filtered_vehicles.iter().find(|v| v.id == id)
    }

    /// Recomputes the displayed list from the source collection.
    ///
    /// Drops any transient sort and clamps the selection.
    pub fn apply_filters(&mut self) {
        self.filtered_vehicles = filter_vehicles(&self.vehicles, &self.filters);
        self.active_sort = None;

        if self.filtered_vehicles.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_vehicles.len() - 1);
        }
    }

    /// Applies `change` to a copy of the filters and commits it when it succeeds.
    ///
    /// Returns whether the filters actually changed; the displayed list is
    /// recomputed only in that case. On error the filters and the displayed list
    /// are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Propagates the validation error from `change`.
    pub fn update_filters<F>(&mut self, change: F) -> Result<bool>
    where
        F: FnOnce(&mut FilterState) -> Result<()>,
    {
        let mut next = self.filters;
        change(&mut next)?;

        if next == self.filters {
            tracing::trace!("filters unchanged, keeping displayed order");
            return Ok(false);
        }

        self.filters = next;
        self.apply_filters();
        Ok(true)
    }

    /// Reorders the displayed list. Does not touch the filters.
    pub fn sort_by(&mut self, order: SortOrder) {
        order.apply(&mut self.filtered_vehicles);
        self.active_sort = Some(order);
    }

    /// Restores default filters and recomputes, even if already at defaults,
    /// so the list returns to source order.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.apply_filters();
    }

    /// Replaces the source collection and recomputes under the current filters.
    pub fn replace_vehicles(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
        self.apply_filters();
    }

    /// Terminal height needed to show every displayed vehicle without windowing.
    #[must_use]
    pub fn rows_to_fit(&self) -> usize {
        self.filtered_vehicles.len().max(1) + CHROME_ROWS
    }

    /// Builds the view model for a terminal of `rows` x `cols`.
    ///
    /// The card list is windowed around the highlighted row when it does not fit.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let filter_summary = self.compute_filter_summary();
        let badges = self.compute_badges();
        let footer = self.compute_footer();

        if self.filtered_vehicles.is_empty() {
            return UIViewModel {
                cards: vec![],
                selected_index: 0,
                header,
                filter_summary,
                badges,
                footer,
                empty_state: Some(Self::compute_empty_state()),
                status: self.status_message.clone(),
            };
        }

        let selected = self.selected_index.min(self.filtered_vehicles.len() - 1);
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_vehicles.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_vehicles.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let cards = self.filtered_vehicles[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, vehicle)| {
                Self::compute_card(vehicle, visible_start + relative_idx == selected, cols)
            })
            .collect();

        UIViewModel {
            cards,
            selected_index: selected - visible_start,
            header,
            filter_summary,
            badges,
            footer,
            empty_state: None,
            status: self.status_message.clone(),
        }
    }

    fn compute_card(vehicle: &Vehicle, is_selected: bool, cols: usize) -> VehicleCard {
        let max_name = if cols < 60 { 14 } else { NAME_COLUMN_WIDTH - 2 };
        let name = if vehicle.name.chars().count() > max_name {
            let kept: String = vehicle.name.chars().take(max_name.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            vehicle.name.clone()
        };

        VehicleCard {
            id: vehicle.id.clone(),
            name,
            vehicle_type: vehicle.vehicle_type.label().to_string(),
            fare: vehicle.fare_label(),
            rating: format!("{:.1}", vehicle.rating),
            arrival: format!("{} min", vehicle.arrival_time),
            capacity: format!("Up to {}", vehicle.capacity),
            is_selected,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.filtered_vehicles.len();
        let noun = if count == 1 { "vehicle" } else { "vehicles" };
        HeaderInfo {
            title: "Available Vehicles".to_string(),
            result_count: format!("{count} {noun} found"),
            sort_label: self.active_sort.map(|s| format!("Sorted: {}", s.label())),
        }
    }

    fn compute_filter_summary(&self) -> FilterSummary {
        let price = self.filters.price_range();
        FilterSummary {
            price: format!(
                "Price Range (${} - ${})",
                format_amount(price.min()),
                format_amount(price.max())
            ),
            vehicle_type: match self.filters.vehicle_type() {
                TypeFilter::All => "Vehicle Type (All Types)".to_string(),
                TypeFilter::Only(t) => format!("Vehicle Type ({})", t.label()),
            },
            arrival: format!("Max Arrival Time ({} min)", self.filters.max_arrival_time()),
            rating: format!("Minimum Rating ({})", format_amount(self.filters.min_rating())),
        }
    }

    fn compute_badges(&self) -> Vec<BadgeInfo> {
        self.filters
            .active_dimensions()
            .into_iter()
            .map(|dimension| {
                let label = match dimension {
                    FilterDimension::Type => self.filters.vehicle_type().to_string(),
                    FilterDimension::Price => self.filters.price_range().to_string(),
                    FilterDimension::Arrival => {
                        format!("<= {} min", self.filters.max_arrival_time())
                    }
                    FilterDimension::Rating => {
                        format!(">= {} stars", format_amount(self.filters.min_rating()))
                    }
                };
                BadgeInfo { dimension, label }
            })
            .collect()
    }

    fn compute_empty_state() -> EmptyState {
        EmptyState {
            message: "No vehicles match your filters".to_string(),
            action: "reset: Reset Filters".to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.filtered_vehicles.is_empty() {
            "reset: reset filters  price/type/arrival/rating: filter  q: quit"
        } else {
            "j/k: navigate  select: book  sort <price-asc|price-desc|arrival|rating>  clear <filter>  reset  q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
