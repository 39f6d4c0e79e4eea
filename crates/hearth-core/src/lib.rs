#![doc(test(attr(deny(warnings))))]

//! hearth-core
//!
//! Stateless services over household snapshots: cadence normalization,
//! aggregation, person filtering, and the what-if plan engine. No
//! terminal I/O and no direct storage interactions.

pub mod error;
pub mod services;
pub mod storage;

pub use error::CoreError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("hearth_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Hearth core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
