//! Tracing subscriber setup

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Where log lines may go while a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Report commands: stderr is free
    Stderr,
    /// The dashboard owns the terminal; only a log file is usable
    Terminal,
}

/// Initialize tracing/logging. Without a log file the dashboard runs with no
/// subscriber at all.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> anyhow::Result<()> {
    let writer = match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, LogTarget::Stderr) => BoxMakeWriter::new(std::io::stderr),
        (None, LogTarget::Terminal) => return Ok(()),
    };
    let ansi = config.file.is_none();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber
                .with(fmt::layer().json().with_writer(writer).with_target(true))
                .try_init()?;
        }
        _ => {
            subscriber
                .with(
                    fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_writer(writer)
                        .with_target(true),
                )
                .try_init()?;
        }
    }

    Ok(())
}
