//! Header component renderer: title and result count.

use crate::ui::helpers::push_colored;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title line and the count line.
///
/// ```text
///  Available Vehicles
///  2 vehicles found                             Sorted: Price: Low to High
/// ```
///
/// The sort label is right-aligned when the terminal is wide enough, and
/// dropped otherwise.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    push_colored(out, &theme.colors.header_fg, &format!(" {}", header.title));
    out.push('\n');

    let count = format!(" {}", header.result_count);
    push_colored(out, &theme.colors.text_normal, &count);

    if let Some(sort) = &header.sort_label {
        let used = count.chars().count() + sort.chars().count() + 1;
        if used <= cols {
            out.push_str(&" ".repeat(cols - used));
            push_colored(out, &theme.colors.text_dim, sort);
        }
    }
    out.push('\n');
}
