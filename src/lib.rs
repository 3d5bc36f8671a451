//! Multirotor performance estimation.
//!
//! The physics lives in small workspace crates (atmosphere, electrical, propulsion) that the
//! `performance` crate composes into a single estimate. Keeping this facade in a library
//! crate lets the CLI tools and any other front-end share it.

pub use drone_atmosphere as atmosphere;
pub use drone_config as config;
pub use drone_electrical as electrical;
pub use drone_export as export;
pub use drone_performance as performance;
pub use drone_propulsion as propulsion;

pub use drone_core::{constants, force, units};
pub use drone_config::{DroneConfig, load_config, load_presets, select_preset};
pub use drone_performance::{SimulationResult, Validations, payload_sweep, run_full_simulation};

/// Returns the version of the library for report metadata and smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Subscriber setup shared by the command-line tools.
pub mod logging {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    /// Install a stderr `fmt` subscriber. `--verbose` forces `debug`; otherwise `RUST_LOG`
    /// is honoured with `info` as the fallback.
    pub fn init(verbose: bool) {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        // A second init (tests, embedding) keeps the first subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }
}
