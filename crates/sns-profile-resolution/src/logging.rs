//! Tracing setup for hosts embedding the resolver

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a plain-text subscriber filtered by `RUST_LOG` (default `info`)
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Profile resolution logging initialized");
    }
    installed
}

/// Install a structured JSON subscriber filtered by `RUST_LOG`
///
/// Returns `false` if a global subscriber was already set.
pub fn init_json() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Profile resolution JSON logging initialized");
    }
    installed
}
