//! Tracing setup: stderr logging plus optional OpenTelemetry file export.
//!
//! ```text
//! tracing macros ─┬─ EnvFilter ─ fmt layer ─────────────────────────→ stderr
//!                 └─ tracing-opentelemetry → SDK → FileSpanExporter → rideboard-otlp.json
//! ```
//!
//! The level comes from `RUST_LOG` when set, otherwise from the `trace_level`
//! config key (default `warn`). OTLP export is off unless `trace_export = true`;
//! spans then land in the data directory as one OTLP JSON document per line,
//! rotated at 10 MB with three backups kept.
//!
//! # Usage
//!
//! ```rust
//! use rideboard::observability::init_tracing;
//! use rideboard::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("listing started");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
