//! Subscriber assembly.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in exported resources and scopes.
pub(super) const SERVICE_NAME: &str = "Rideboard";

/// File name of the OTLP export inside the data directory.
const TRACE_FILE_NAME: &str = "rideboard-otlp.json";

/// Installs the global subscriber.
///
/// Idempotent: later calls are ignored once a subscriber is set. If the data
/// directory cannot be created, OTLP export is skipped and a warning is logged;
/// stderr logging still works.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let mut export_error = None;
    let otel_layer = if config.trace_export {
        let data_dir = crate::infrastructure::get_data_dir();
        match std::fs::create_dir_all(&data_dir) {
            Ok(()) => {
                let resource = Resource::new(vec![opentelemetry::KeyValue::new(
                    "service.name",
                    SERVICE_NAME,
                )]);
                let provider =
                    tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
                Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
            }
            Err(e) => {
                export_error = Some((data_dir, e));
                None
            }
        }
    } else {
        None
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(otel_layer)
        .try_init()
        .is_ok();

    if let Some((dir, error)) = export_error {
        tracing::warn!(dir = %dir.display(), error = %error, "trace export disabled");
    }
    if installed {
        tracing::debug!(level, export = config.trace_export, "tracing initialized");
    }
}
