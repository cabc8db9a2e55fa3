//! Application layer coordinating listing state, events, and actions.
//!
//! This module sits between the front-end runtime (`main.rs`) and the
//! domain/catalog/ui layers.
//!
//! # Architecture
//!
//! ```text
//! Input line → parse_command → Event → handle_event → State mutation → Actions
//!                                                          ↓
//!                                               compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`command`]: Text command parser for interactive sessions
//! - [`handler`]: Event processing and recompute-on-change
//! - [`state`]: Listing state container and view model computation

pub mod actions;
pub mod command;
pub mod handler;
pub mod state;

pub use actions::{Action, BookingRequest};
pub use command::parse_command;
pub use handler::{handle_event, Event};
pub use state::AppState;
