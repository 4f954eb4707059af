//! Tracing initialization and subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotatingFileWriter;
use crate::Config;

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. [`DEFAULT_TRACE_LEVEL`]
///
/// Events go to `config.trace_file` through a [`RotatingFileWriter`] when a
/// file is configured, and to stderr otherwise.
///
/// # Initialization Behavior
///
/// - Creates the trace file's directory if needed
/// - Falls back to stderr if that fails
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```
/// use devhub::observability::init_tracing;
/// use devhub::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
    });

    let trace_file = config
        .trace_file
        .as_deref()
        .map(crate::infrastructure::resolve_data_path)
        .filter(|path| match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir).is_ok(),
            _ => true,
        });

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match trace_file {
        Some(path) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(RotatingFileWriter::new(path)),
            )
            .try_init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!("tracing initialized");
    }
}
