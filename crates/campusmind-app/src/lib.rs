//! Application layer for the CampusMind client: configuration, shared
//! state, the platform adapters behind the chat session, and one
//! controller module per page.

pub mod config;
pub mod pages;
pub mod state;
pub mod stores;

/// Install the process-wide tracing subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
