//! Text commands for the interactive `browse` session.
//!
//! Each input line maps to one [`Event`]:
//!
//! ```text
//! price MIN MAX        type TYPE|all        arrival MINUTES      rating MIN
//! sort price-asc|price-desc|arrival|rating
//! clear price|type|arrival|rating           reset
//! next | j             prev | k             select [ID]          quit | q
//! ```

use crate::app::Event;
use crate::domain::error::{RideboardError, Result};
use crate::domain::{FilterDimension, SortOrder, TypeFilter};

/// Parses one command line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`RideboardError::Command`] for unknown commands, missing or extra
/// arguments, and unparsable numbers; type and sort names surface their own
/// error variants.
///
/// # Example
///
/// ```
/// use rideboard::app::{parse_command, Event};
///
/// let event = parse_command("price 0 30")?;
/// assert_eq!(event, Some(Event::SetPriceRange { min: 0.0, max: 30.0 }));
/// # Ok::<(), rideboard::RideboardError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Option<Event>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let event = match command.to_ascii_lowercase().as_str() {
        "price" => {
            let [min, max] = expect_args::<2>(command, &args)?;
            Event::SetPriceRange {
                min: parse_number(min)?,
                max: parse_number(max)?,
            }
        }
        "type" => {
            let [name] = expect_args::<1>(command, &args)?;
            Event::SetVehicleType(name.parse::<TypeFilter>()?)
        }
        "arrival" => {
            let [minutes] = expect_args::<1>(command, &args)?;
            let minutes = minutes.parse::<u32>().map_err(|_| {
                RideboardError::Command(format!("'{minutes}' is not a whole number of minutes"))
            })?;
            Event::SetMaxArrivalTime(minutes)
        }
        "rating" => {
            let [rating] = expect_args::<1>(command, &args)?;
            Event::SetMinRating(parse_number(rating)?)
        }
        "sort" => {
            let [order] = expect_args::<1>(command, &args)?;
            Event::Sort(order.parse::<SortOrder>()?)
        }
        "clear" => {
            let [dimension] = expect_args::<1>(command, &args)?;
            Event::RemoveBadge(dimension.parse::<FilterDimension>()?)
        }
        "reset" => {
            expect_args::<0>(command, &args)?;
            Event::ResetFilters
        }
        "next" | "j" | "down" => Event::KeyDown,
        "prev" | "k" | "up" => Event::KeyUp,
        "select" | "book" => match args.as_slice() {
            [] => Event::SelectVehicle,
            [id] => Event::SelectVehicleId((*id).to_string()),
            _ => return Err(arity_error(command, 1, args.len())),
        },
        "quit" | "q" | "exit" => Event::Quit,
        other => {
            return Err(RideboardError::Command(format!("unknown command '{other}'")));
        }
    };

    Ok(Some(event))
}

fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| arity_error(command, N, args.len()))
}

fn arity_error(command: &str, expected: usize, got: usize) -> RideboardError {
    RideboardError::Command(format!(
        "'{command}' takes {expected} argument(s), got {got}"
    ))
}

fn parse_number(text: &str) -> Result<f64> {
    let text = text.trim_start_matches('$');
    text.parse::<f64>()
        .map_err(|_| RideboardError::Command(format!("'{text}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleType;

    #[test]
    fn parses_filter_commands() {
        assert_eq!(
            parse_command("price $10 40").unwrap(),
            Some(Event::SetPriceRange { min: 10.0, max: 40.0 })
        );
        assert_eq!(
            parse_command("type Luxury").unwrap(),
            Some(Event::SetVehicleType(TypeFilter::Only(VehicleType::Luxury)))
        );
        assert_eq!(
            parse_command("type all").unwrap(),
            Some(Event::SetVehicleType(TypeFilter::All))
        );
        assert_eq!(parse_command("arrival 10").unwrap(), Some(Event::SetMaxArrivalTime(10)));
        assert_eq!(parse_command("rating 4.5").unwrap(), Some(Event::SetMinRating(4.5)));
    }

    #[test]
    fn parses_sort_clear_and_navigation() {
        assert_eq!(
            parse_command("sort price-desc").unwrap(),
            Some(Event::Sort(SortOrder::PriceDescending))
        );
        assert_eq!(
            parse_command("clear type").unwrap(),
            Some(Event::RemoveBadge(FilterDimension::Type))
        );
        assert_eq!(parse_command("  reset  ").unwrap(), Some(Event::ResetFilters));
        assert_eq!(parse_command("j").unwrap(), Some(Event::KeyDown));
        assert_eq!(parse_command("prev").unwrap(), Some(Event::KeyUp));
        assert_eq!(parse_command("select").unwrap(), Some(Event::SelectVehicle));
        assert_eq!(
            parse_command("select 7").unwrap(),
            Some(Event::SelectVehicleId("7".to_string()))
        );
        assert_eq!(parse_command("q").unwrap(), Some(Event::Quit));
    }

    #[test]
    fn blank_line_is_no_event() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_command("fly"), Err(RideboardError::Command(_))));
        assert!(matches!(parse_command("price 10"), Err(RideboardError::Command(_))));
        assert!(matches!(parse_command("reset now"), Err(RideboardError::Command(_))));
        assert!(matches!(parse_command("arrival -5"), Err(RideboardError::Command(_))));
        assert!(matches!(parse_command("rating high"), Err(RideboardError::Command(_))));
        assert!(matches!(
            parse_command("type hovercraft"),
            Err(RideboardError::UnknownVehicleType(_))
        ));
        assert!(matches!(
            parse_command("sort distance"),
            Err(RideboardError::UnknownSortOrder(_))
        ));
    }
}
