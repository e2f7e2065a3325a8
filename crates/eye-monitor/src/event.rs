//! Alert transition events

use serde::{Deserialize, Serialize};

/// Events emitted by the monitor on alert transitions.
///
/// Consumed by the audio driver (start/stop looping playback) and the UI
/// layer (show/hide the alert overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorEvent {
    /// Eyes have been continuously closed past the configured threshold
    AlertTriggered {
        /// Length of the closed run when the alert fired (milliseconds)
        closed_duration_ms: u64,
    },

    /// Eyes opened or the face was lost while an alert was ongoing
    AlertCleared,
}
