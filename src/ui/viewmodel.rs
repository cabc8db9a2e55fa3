//! View model types representing renderable listing state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They hold display-ready strings only, no business logic.

use crate::domain::FilterDimension;

/// Complete view model for one frame of the listing.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Vehicle rows within the visible window.
    pub cards: Vec<VehicleCard>,

    /// Index of the highlighted row within `cards`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub filter_summary: FilterSummary,

    /// One badge per active filter dimension.
    pub badges: Vec<BadgeInfo>,

    pub footer: FooterInfo,

    /// Present when no vehicle passes the filters.
    pub empty_state: Option<EmptyState>,

    /// Outcome of the last command (errors, booking hand-offs).
    pub status: Option<String>,
}

/// One vehicle row.
#[derive(Debug, Clone)]
pub struct VehicleCard {
    pub id: String,
    pub name: String,
    pub vehicle_type: String,
    /// E.g. `$25/ride`.
    pub fare: String,
    /// One decimal place, e.g. `4.0`.
    pub rating: String,
    /// E.g. `8 min`.
    pub arrival: String,
    /// E.g. `Up to 4`.
    pub capacity: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// E.g. `2 vehicles found`.
    pub result_count: String,
    /// Label of the transient sort, if one is in effect.
    pub sort_label: Option<String>,
}

/// Current value of each filter control.
#[derive(Debug, Clone)]
pub struct FilterSummary {
    pub price: String,
    pub vehicle_type: String,
    pub arrival: String,
    pub rating: String,
}

/// Removable active-filter indicator.
#[derive(Debug, Clone)]
pub struct BadgeInfo {
    /// Dimension reset when the badge is removed.
    pub dimension: FilterDimension,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty-result message with its one-action reset hint.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub action: String,
}
