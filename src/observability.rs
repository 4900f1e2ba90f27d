//! Tracing setup for the binary
//!
//! The library only emits events; installing a subscriber is left to callers.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Swaps the active filter once configuration is known
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter from `RUST_LOG`, falling back to `default_filter`
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber
///
/// Returns `None` when a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Option<FilterHandle> {
    let (filter, handle) = reload::Layer::new(env_filter(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok()
        .map(|_| handle)
}

/// Replace the default filter; `RUST_LOG` still wins
pub fn set_default_filter(
    handle: &FilterHandle,
    default_filter: &str,
) -> Result<(), reload::Error> {
    handle.reload(env_filter(default_filter))
}
