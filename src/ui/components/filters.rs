//! Filter summary and active-filter badges.

use crate::ui::helpers::push_colored;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BadgeInfo, FilterSummary};

/// Renders the current value of every filter control on one line.
pub fn render_filter_summary(out: &mut String, summary: &FilterSummary, theme: &Theme) {
    let line = format!(
        " {}  {}  {}  {}",
        summary.price, summary.vehicle_type, summary.arrival, summary.rating
    );
    push_colored(out, &theme.colors.text_dim, &line);
    out.push('\n');
}

/// Renders removable badges, or a dim placeholder when no filter is active.
///
/// Each badge shows the command that removes it, e.g. `[luxury ×] clear type`.
pub fn render_badges(out: &mut String, badges: &[BadgeInfo], theme: &Theme) {
    if badges.is_empty() {
        out.push_str(Theme::dim());
        push_colored(out, &theme.colors.text_dim, " No active filters");
        out.push('\n');
        return;
    }

    out.push(' ');
    for badge in badges {
        out.push_str(&Theme::bg(&theme.colors.badge_bg));
        push_colored(out, &theme.colors.badge_fg, &format!(" {} × ", badge.label));
        push_colored(
            out,
            &theme.colors.text_dim,
            &format!(" clear {}  ", badge.dimension.as_str()),
        );
    }
    out.push('\n');
}
