//! Command-line front-end.
//!
//! Thin wrapper over the library: it merges flags into the loaded [`Config`],
//! installs tracing, builds the listing with [`rideboard::initialize`], and
//! either prints it once (`list`) or runs an interactive session (`browse`).
//!
//! # Browse commands
//!
//! One command per line on stdin:
//!
//! - `price MIN MAX`, `type TYPE|all`, `arrival MINUTES`, `rating MIN`
//! - `sort price-asc|price-desc|arrival|rating`
//! - `clear price|type|arrival|rating`, `reset`
//! - `next`/`j`, `prev`/`k`, `select [ID]`
//! - `quit`/`q`

#![allow(clippy::multiple_crate_versions)]

use clap::{Args, Parser, Subcommand};
use rideboard::domain::filter::{PRICE_CEILING, PRICE_FLOOR};
use rideboard::domain::vehicle::format_amount;
use rideboard::ui::helpers::CLEAR_SCREEN;
use rideboard::ui::ROW_WIDTH;
use rideboard::{
    handle_event, parse_command, Action, AppState, Config, Event, Result, SortOrder, TypeFilter,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Terminal height for `browse` when neither config nor flags set one.
const DEFAULT_ROWS: usize = 24;

/// Frame width; wide enough for every column plus some slack.
const FRAME_COLS: usize = ROW_WIDTH + 3;

#[derive(Debug, Parser)]
#[command(name = "rideboard")]
#[command(version)]
#[command(about = "Filter, sort and pick ride options from a vehicle catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (default: <config dir>/rideboard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON vehicle catalog (default: built-in sample set)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Built-in theme name
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, global = true)]
    theme_file: Option<PathBuf>,

    /// Log filter directive (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    trace_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the listing once and exit
    List(ListArgs),

    /// Interactive session reading commands from stdin
    Browse {
        /// Terminal rows to render
        #[arg(long)]
        rows: Option<usize>,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Lower price bound, inclusive
    #[arg(long)]
    min_price: Option<f64>,

    /// Upper price bound, inclusive
    #[arg(long)]
    max_price: Option<f64>,

    /// Vehicle type (economy, standard, premium, luxury, all)
    #[arg(long = "type")]
    vehicle_type: Option<TypeFilter>,

    /// Maximum arrival time in minutes, inclusive
    #[arg(long)]
    max_arrival: Option<u32>,

    /// Minimum rating, inclusive
    #[arg(long)]
    min_rating: Option<f64>,

    /// Sort order (price-asc, price-desc, arrival, rating)
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Print the matching vehicles as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Filter events for the flags that were given, in a fixed order.
    fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.min_price.is_some() || self.max_price.is_some() {
            events.push(Event::SetPriceRange {
                min: self.min_price.unwrap_or(PRICE_FLOOR),
                max: self.max_price.unwrap_or(PRICE_CEILING),
            });
        }
        if let Some(selection) = self.vehicle_type {
            events.push(Event::SetVehicleType(selection));
        }
        if let Some(minutes) = self.max_arrival {
            events.push(Event::SetMaxArrivalTime(minutes));
        }
        if let Some(rating) = self.min_rating {
            events.push(Event::SetMinRating(rating));
        }
        if let Some(order) = self.sort {
            events.push(Event::Sort(order));
        }
        events
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(theme) = cli.theme {
        config.theme_name = Some(theme);
    }
    if let Some(theme_file) = cli.theme_file {
        config.theme_file = Some(theme_file);
    }
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }

    rideboard::observability::init_tracing(&config);

    let mut state = rideboard::initialize(&config)?;

    match cli.command {
        Command::List(args) => list(&mut state, &args),
        Command::Browse { rows } => {
            let rows = rows.or(config.rows).unwrap_or(DEFAULT_ROWS);
            browse(&mut state, rows)
        }
    }
}

fn list(state: &mut AppState, args: &ListArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(state, args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Applies the `list` flags and writes the result as a frame or as JSON.
fn write_list<W: Write>(state: &mut AppState, args: &ListArgs, out: &mut W) -> Result<()> {
    let _span = tracing::debug_span!("list").entered();

    for event in args.events() {
        handle_event(state, &event)?;
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &state.filtered_vehicles)
            .map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        let frame = rideboard::ui::render(state, state.rows_to_fit(), FRAME_COLS);
        out.write_all(frame.as_bytes())?;
    }
    Ok(())
}

fn browse(state: &mut AppState, rows: usize) -> Result<()> {
    let _span = tracing::debug_span!("browse", rows).entered();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        {
            let mut out = stdout.lock();
            write!(out, "{CLEAR_SCREEN}{}> ", rideboard::ui::render(state, rows, FRAME_COLS))?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!("stdin closed");
            return Ok(());
        };
        if !apply_line(state, &line) {
            return Ok(());
        }
    }
}

/// Runs one browse command. Returns `false` once the session should end.
///
/// Failures land on the status line; the session carries on.
fn apply_line(state: &mut AppState, line: &str) -> bool {
    state.status_message = None;
    let event = match parse_command(line) {
        Ok(Some(event)) => event,
        Ok(None) => return true,
        Err(e) => {
            state.status_message = Some(e.to_string());
            return true;
        }
    };

    let actions = match handle_event(state, &event) {
        Ok((_, actions)) => actions,
        Err(e) => {
            state.status_message = Some(e.to_string());
            return true;
        }
    };

    for action in actions {
        match action {
            Action::InitiateBooking(request) => {
                tracing::info!(
                    vehicle_id = %request.vehicle_id,
                    fare = request.fare,
                    "booking requested"
                );
                state.status_message = Some(format!(
                    "Booking requested: {} (${}/ride) at {}",
                    request.vehicle_name,
                    format_amount(request.fare),
                    request.requested_at.format("%H:%M:%S UTC")
                ));
            }
            Action::Quit => return false,
        }
    }
    true
}
