//! Empty state component renderer.

use crate::ui::helpers::push_colored;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered empty-result message and its reset hint.
///
/// ```text
///
///              No vehicles match your filters
///                  reset: Reset Filters
///
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    let msg_padding = cols.saturating_sub(empty.message.chars().count()) / 2;
    out.push_str(&" ".repeat(msg_padding));
    push_colored(out, &theme.colors.empty_state_fg, &empty.message);
    out.push('\n');

    let action_padding = cols.saturating_sub(empty.action.chars().count()) / 2;
    out.push_str(&" ".repeat(action_padding));
    out.push_str(Theme::bold());
    push_colored(out, &theme.colors.text_normal, &empty.action);
    out.push('\n');
}
