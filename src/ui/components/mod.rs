//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title and result count
//! - [`filters`]: Filter summary and removable badges
//! - [`table`]: Vehicle rows (ID, NAME, TYPE, FARE, RATING, ARRIVAL, CAPACITY)
//! - [`empty`]: Empty-result message with reset hint
//! - [`footer`]: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header: title, count]
//! [Border]
//! [Filter summary]
//! [Badges]
//! [Border]
//! [Table headers]
//! [Table rows | Empty state]
//! [Border]
//! [Status]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod header;
mod table;

pub use table::ROW_WIDTH;

use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filters::{render_badges, render_filter_summary};
use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Renders a full listing frame into `out`.
pub fn render_listing(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    push_border(out, &theme.colors.border, cols);
    render_filter_summary(out, &vm.filter_summary, theme);
    render_badges(out, &vm.badges, theme);
    push_border(out, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        render_table_headers(out, theme);
        render_table_rows(out, &vm.cards, theme, cols);
    }

    push_border(out, &theme.colors.border, cols);
    render_footer(out, vm.status.as_deref(), &vm.footer, theme);
}
