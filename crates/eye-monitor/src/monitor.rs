//! Closed-eyes alert state machine

use face_stream::Observation;
use tracing::{debug, info};

use crate::config::{MonitorConfig, EYE_CLOSED_PROBABILITY};
use crate::event::MonitorEvent;
use crate::state::MonitorState;

/// Tracks continuous eyes-closed time and raises/clears the wake-up alert.
///
/// Observations must arrive in timestamp order from a single producer;
/// processing is synchronous and never blocks.
pub struct EyeStateMonitor {
    config: MonitorConfig,
    state: MonitorState,
}

impl EyeStateMonitor {
    /// Create a monitor in its initial state (no run, no alert)
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            state: MonitorState::default(),
        }
    }

    /// Process one observation at wall-clock time `now_ms`.
    ///
    /// Emits at most one event: `AlertTriggered` when the closed run reaches
    /// the threshold, `AlertCleared` when an interruption ends an active
    /// alert. While the alert stays active no repeat trigger is emitted.
    pub fn process_observation(
        &mut self,
        obs: &Observation,
        now_ms: u64,
    ) -> Option<MonitorEvent> {
        if !eyes_closed(obs) {
            // Eyes open or face lost: either one interrupts the run. A
            // dropped face lock must not sustain an alarm.
            return self.clear_run();
        }

        let closed_since = match self.state.closed_since_ms {
            Some(start) => start,
            None => {
                debug!(start_ms = now_ms, "closed-eyes run started");
                self.state.closed_since_ms = Some(now_ms);
                return None;
            }
        };

        let elapsed = now_ms.saturating_sub(closed_since);
        if elapsed >= self.config.closed_eye_threshold_ms && !self.state.alert_active {
            self.state.alert_active = true;
            info!(closed_duration_ms = elapsed, "wake-up alert triggered");
            return Some(MonitorEvent::AlertTriggered {
                closed_duration_ms: elapsed,
            });
        }

        None
    }

    /// Clear any closed run and active alert, as when monitoring is paused
    /// or stopped. Emits `AlertCleared` only if an alert was ongoing.
    pub fn force_clear(&mut self) -> Option<MonitorEvent> {
        self.clear_run()
    }

    fn clear_run(&mut self) -> Option<MonitorEvent> {
        if self.state.closed_since_ms.take().is_some() {
            debug!("closed-eyes run reset");
        }

        if self.state.alert_active {
            self.state.alert_active = false;
            info!("wake-up alert cleared");
            return Some(MonitorEvent::AlertCleared);
        }

        None
    }

    /// Whether a wake-up alert is currently ongoing
    pub fn alert_active(&self) -> bool {
        self.state.alert_active
    }

    /// Length of the current closed run at `now_ms`, if one is growing.
    ///
    /// Feeds the live "Eyes closed for: Ns" readout while the run builds.
    pub fn closed_duration(&self, now_ms: u64) -> Option<u64> {
        self.state
            .closed_since_ms
            .map(|start| now_ms.saturating_sub(start))
    }

    /// Snapshot of the session state
    pub fn state(&self) -> MonitorState {
        self.state
    }
}

/// Both eyes must independently read below the cutoff. A missing face never
/// counts as closed, and neither does a single low eye.
fn eyes_closed(obs: &Observation) -> bool {
    match &obs.face {
        Some(face) => {
            face.left_openness() < EYE_CLOSED_PROBABILITY
                && face.right_openness() < EYE_CLOSED_PROBABILITY
        }
        None => false,
    }
}
