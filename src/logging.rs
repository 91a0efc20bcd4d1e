//! Structured logging: compact stderr output plus an optional JSONL file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ui_render_core::{config, logging};
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&config::load_config());
//!
//! tracing::info!(component = "CardHeader", "Rendered");
//! ```
//!
//! # JSONL Output Format
//!
//! Each line is a valid JSON object:
//! ```json
//! {"timestamp":"2026-10-17T10:30:45.123Z","level":"WARN","target":"ui_render_core::contract","fields":{"message":"Prop contract violation","component":"CardHeader","prop":"textAlign"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::RenderConfig;

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file, if any.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging from the render config.
///
/// `RUST_LOG` overrides `config.log_filter`. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init(config: &RenderConfig) -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let (json_layer, file_guard) = match config.log_file.as_deref().map(expand_path) {
        Some(path) => match open_log_file(&path) {
            Some(file) => {
                let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
                let layer = fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_span_events(FmtSpan::NONE);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        },
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            event_type = "logging",
            log_file = ?config.log_file,
            "Logging initialized"
        );
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("[LOGGING] Failed to create log directory: {}", e);
            return None;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok()
}
