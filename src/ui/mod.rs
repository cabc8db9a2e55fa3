//! User interface rendering layer.
//!
//! Turns listing state into ANSI-styled terminal frames:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → frame text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, filters, table, empty state, footer
//! - [`helpers`]: Width fitting, borders, ANSI stripping
//! - [`theme`]: Colour schemes and escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::ROW_WIDTH;
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BadgeInfo, EmptyState, FilterSummary, FooterInfo, HeaderInfo, UIViewModel, VehicleCard,
};
