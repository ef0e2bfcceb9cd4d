//! Diagnostic logging through `tracing`.
//!
//! Findings are printed by the reporter, not logged. The subscriber installed
//! here only carries the library's own diagnostics (files checked, scan
//! errors) and always writes to stderr so JSON on stdout stays clean.

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set: warn, then one step per `-v`.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = build_env_filter(level_for_verbosity(verbosity));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    // RUST_LOG overrides -v
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,cqrlog_cli={level},cqrlog_validator={level},cqrlog_rules={level}"
        ))
    })
}
