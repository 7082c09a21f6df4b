//! Tracing subscriber setup for hosts and tools.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Result, SimnetError};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,xwallet_ledger=debug,xwallet_simnet=debug";

/// Install the global subscriber: `RUST_LOG` (or [`DEFAULT_FILTER`]),
/// human-readable or JSON lines.
///
/// # Errors
/// Returns [`SimnetError::Logging`] if a global subscriber is already set.
pub fn init_tracing(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
    installed.map_err(|e| SimnetError::Logging(e.to_string()))
}
