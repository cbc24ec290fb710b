//! Tracing subscriber setup
//!
//! Logs go to stderr, filtered by `RUST_LOG` with a default level raised by
//! each `-v`. The terminal browser must not write to the screen it is
//! drawing, so it logs to a file or nowhere.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Map `-v` occurrences to a default level
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
pub fn init(verbosity: u8, target: LogTarget<'_>) -> io::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbosity).into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };

    Ok(())
}
