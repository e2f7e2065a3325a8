//! Session configuration

use config::{Config, ConfigError, Environment, File};
use eye_monitor::MonitorConfig;
use serde::{Deserialize, Serialize};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Continuous eyes-closed time before the alert fires (milliseconds)
    pub closed_eye_threshold_ms: u64,

    /// Observation sampling interval (milliseconds)
    pub sample_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            closed_eye_threshold_ms: 2000,
            sample_interval_ms: 100,
        }
    }
}

impl SessionConfig {
    /// Load from an optional `wakeguard` config file plus `WAKEGUARD_*`
    /// environment overrides, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("wakeguard").required(false))
            .add_source(Environment::with_prefix("WAKEGUARD"))
            .build()?;

        settings.try_deserialize()
    }

    /// Lower threshold for earlier warnings
    pub fn sensitive() -> Self {
        Self {
            closed_eye_threshold_ms: 1000,
            ..Default::default()
        }
    }

    /// Higher threshold to reduce false alarms
    pub fn relaxed() -> Self {
        Self {
            closed_eye_threshold_ms: 3000,
            ..Default::default()
        }
    }

    /// Monitor view of this configuration
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            closed_eye_threshold_ms: self.closed_eye_threshold_ms,
        }
    }
}
