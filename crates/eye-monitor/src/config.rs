//! Monitor configuration

use serde::{Deserialize, Serialize};

/// Eye-openness probability below which an eye counts as closed.
///
/// Fixed property of the detector, not a per-session option. Both eyes must
/// independently read below it; a single low eye is treated as noise.
pub const EYE_CLOSED_PROBABILITY: f32 = 0.2;

/// Monitor configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Continuous eyes-closed time before the alert fires (milliseconds)
    pub closed_eye_threshold_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            closed_eye_threshold_ms: 2000,
        }
    }
}
