//! Shared plumbing for the shellkit binaries.
//!
//! Every binary initializes logging via `tracing`, parses its arguments with
//! `clap`, and dispatches to a handler in [`commands`].

pub mod cli;
pub mod commands;

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
