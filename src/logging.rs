//! Tracing subscriber setup for the command-line binary.
//!
//! Logs go to stderr so stdout carries only CSS, links and JSON.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Fails if a subscriber is
/// already installed.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "warn");
    }
}
