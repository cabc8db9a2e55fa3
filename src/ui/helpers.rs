//! Shared rendering utilities.
//!
//! Components write into a `String` frame rather than straight to stdout, so a
//! frame can be printed, logged, or inspected in tests. Widths are counted in
//! characters, not bytes.

use crate::ui::theme::Theme;

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Pads or truncates `text` to exactly `width` characters.
///
/// ```rust
/// use rideboard::ui::helpers::fit;
///
/// assert_eq!(fit("Sedan", 8), "Sedan   ");
/// assert_eq!(fit("Luxury Limousine", 8), "Luxury L");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Appends `text` styled with a foreground colour, followed by a reset.
pub fn push_colored(out: &mut String, color: &str, text: &str) {
    out.push_str(&Theme::fg(color));
    out.push_str(text);
    out.push_str(Theme::reset());
}

/// Appends a full-width horizontal rule and a newline.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    push_colored(out, color, &"─".repeat(cols));
    out.push('\n');
}

/// Strips ANSI escape sequences, leaving the visible text.
///
/// ```rust
/// use rideboard::ui::helpers::strip_ansi;
///
/// assert_eq!(strip_ansi("\u{1b}[1mbold\u{1b}[0m"), "bold");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end at the first byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("ñandú", 6), "ñandú ");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn strip_ansi_handles_truecolor() {
        let mut out = String::new();
        push_colored(&mut out, "#a6e3a1", "$25/ride");
        assert_eq!(strip_ansi(&out), "$25/ride");
    }

    #[test]
    fn border_fills_width() {
        let mut out = String::new();
        push_border(&mut out, "#45475a", 5);
        assert_eq!(strip_ansi(&out), "─────\n");
    }
}
