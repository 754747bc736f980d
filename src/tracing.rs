//! Logging setup for the editor
//!
//! Two destinations: the console, filtered by `RUST_LOG` (default `warn`
//! so shell output stays readable), and a daily-rotated debug-level file
//! under `~/.config/datgrid/logs/` for troubleshooting after the fact.
//!
//! # Usage
//!
//! Configure console verbosity via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=datgrid::service=debug` - module-level filtering
//! - `RUST_LOG=datgrid::dat=trace,datgrid::shell=debug` - scoped filtering

use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the console and file logging layers
///
/// Called once at startup, before any other work. When the logs
/// directory cannot be created the file layer is skipped with a warning
/// on stderr; the console layer always comes up.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer())
        .init();
}

/// Debug-level layer writing to `datgrid.log` with daily rotation
fn file_layer<S>() -> Option<impl Layer<S>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return None;
        }
    };
    let appender = tracing_appender::rolling::daily(logs_dir, "datgrid.log");

    Some(
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug")),
    )
}
