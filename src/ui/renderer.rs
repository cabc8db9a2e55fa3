//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → ANSI-styled frame text
//!
//! # Example
//!
//! ```rust
//! use rideboard::app::AppState;
//! use rideboard::catalog::sample_vehicles;
//! use rideboard::ui::{render, helpers::strip_ansi, Theme};
//!
//! let state = AppState::new(sample_vehicles(), Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(strip_ansi(&frame).contains("8 vehicles found"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;
use crate::ui::theme::Theme;

/// Renders the listing for a `rows` x `cols` terminal and returns the frame.
///
/// The frame does not clear the screen; interactive callers prefix
/// [`CLEAR_SCREEN`](crate::ui::helpers::CLEAR_SCREEN).
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_listing(&mut out, vm, theme, cols);
    out
}
