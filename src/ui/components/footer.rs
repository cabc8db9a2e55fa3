//! Footer component renderer: status line and keybinding hints.

use crate::ui::helpers::push_colored;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(out: &mut String, status: Option<&str>, footer: &FooterInfo, theme: &Theme) {
    if let Some(status) = status {
        push_colored(out, &theme.colors.status_fg, &format!(" {status}"));
    }
    out.push('\n');

    out.push_str(Theme::dim());
    push_colored(out, &theme.colors.text_dim, &format!(" {}", footer.keybindings));
    out.push('\n');
}
