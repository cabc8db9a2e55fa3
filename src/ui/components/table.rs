//! Vehicle table renderer.
//!
//! One row per displayed vehicle, with the highlighted row drawn in selection
//! colours across the full terminal width.

use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::VehicleCard;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 22;
const TYPE_WIDTH: usize = 10;
const FARE_WIDTH: usize = 11;
const RATING_WIDTH: usize = 8;
const ARRIVAL_WIDTH: usize = 9;
const CAPACITY_WIDTH: usize = 10;

/// Width of a row, including the two-character selection marker.
pub const ROW_WIDTH: usize = 2
    + ID_WIDTH
    + NAME_WIDTH
    + TYPE_WIDTH
    + FARE_WIDTH
    + RATING_WIDTH
    + ARRIVAL_WIDTH
    + CAPACITY_WIDTH;

/// Renders the bold column headers.
pub fn render_table_headers(out: &mut String, theme: &Theme) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str("  ");
    out.push_str(&fit("ID", ID_WIDTH));
    out.push_str(&fit("NAME", NAME_WIDTH));
    out.push_str(&fit("TYPE", TYPE_WIDTH));
    out.push_str(&fit("FARE", FARE_WIDTH));
    out.push_str(&fit("RATING", RATING_WIDTH));
    out.push_str(&fit("ARRIVAL", ARRIVAL_WIDTH));
    out.push_str("CAPACITY");
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders every card as a table row.
pub fn render_table_rows(out: &mut String, cards: &[VehicleCard], theme: &Theme, cols: usize) {
    for card in cards {
        render_table_row(out, card, theme, cols);
    }
}

/// Renders one row.
///
/// Fare and rating carry their own colours unless the row is selected, in which
/// case the selection colours cover the whole line.
fn render_table_row(out: &mut String, card: &VehicleCard, theme: &Theme, cols: usize) {
    let base = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    out.push_str(&base);
    out.push_str(if card.is_selected { "> " } else { "  " });
    out.push_str(&fit(&card.id, ID_WIDTH));
    out.push_str(&fit(&card.name, NAME_WIDTH));
    out.push_str(&fit(&card.vehicle_type, TYPE_WIDTH));

    if card.is_selected {
        out.push_str(&fit(&card.fare, FARE_WIDTH));
        out.push_str(&fit(&format!("★ {}", card.rating), RATING_WIDTH));
    } else {
        out.push_str(&Theme::fg(&theme.colors.price_fg));
        out.push_str(&fit(&card.fare, FARE_WIDTH));
        out.push_str(&Theme::fg(&theme.colors.rating_fg));
        out.push_str(&fit(&format!("★ {}", card.rating), RATING_WIDTH));
        out.push_str(&base);
    }

    out.push_str(&fit(&card.arrival, ARRIVAL_WIDTH));
    out.push_str(&fit(&card.capacity, CAPACITY_WIDTH));
    out.push_str(&" ".repeat(cols.saturating_sub(ROW_WIDTH)));
    out.push_str(Theme::reset());
    out.push('\n');
}
