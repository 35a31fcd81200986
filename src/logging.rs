//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Levels:
//! - `warn`: default, config problems
//! - `info`: startup and shutdown
//! - `debug`: every state change, plus the state dump when enabled
//! - `trace`: unhandled key and view events
//!
//! The interactive form owns the terminal, so it never logs to stderr:
//! without a log file its output is discarded.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl LogConfig {
    /// Map a `-v` count to a level.
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    pub fn from_verbosity(verbosity: u8, target: LogTarget) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, target }
    }
}

/// Install the global subscriber. Call once, at startup.
///
/// `RUST_LOG` overrides the level from the config.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    match &config.target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::Discard => {
            let layer = fmt::layer().with_writer(io::sink);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
    Ok(())
}
