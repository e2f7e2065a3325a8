//! Monitoring Session Runtime
//!
//! Wires a face-observation source to the closed-eyes monitor and the alert
//! sinks, and drives sampling at a fixed cadence with pause/resume and stop
//! controls.

pub mod config;
pub mod runner;

pub use config::SessionConfig;
pub use runner::{MonitorSession, SessionCommand};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
