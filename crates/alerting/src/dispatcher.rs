//! Alert Dispatcher Implementation

use eye_monitor::MonitorEvent;
use tracing::{info, warn};

use crate::player::AlarmPlayer;

/// Drives alarm playback and overlay text from monitor events.
pub struct AlertDispatcher<P: AlarmPlayer> {
    player: P,
    overlay: Option<String>,
}

impl<P: AlarmPlayer> AlertDispatcher<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            overlay: None,
        }
    }

    /// React to one monitor event.
    ///
    /// Playback failures are logged and swallowed: the overlay and the
    /// monitor's own alert state must stay correct even when audio fails.
    pub fn dispatch(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::AlertTriggered { closed_duration_ms } => {
                self.overlay = Some(overlay_text(closed_duration_ms));
                info!(closed_duration_ms, "starting alarm playback");
                if let Err(e) = self.player.start_loop() {
                    warn!("Failed to start alarm playback: {}", e);
                }
            }
            MonitorEvent::AlertCleared => {
                self.overlay = None;
                info!("stopping alarm playback");
                if let Err(e) = self.player.stop() {
                    warn!("Failed to stop alarm playback: {}", e);
                }
            }
        }
    }

    /// Overlay text while an alert is ongoing
    pub fn overlay_text(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Whether the alert overlay is currently shown
    pub fn alert_visible(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

/// Overlay string shown during an alert, duration rounded to whole seconds
fn overlay_text(closed_duration_ms: u64) -> String {
    format!(
        "Eyes closed for {} seconds",
        (closed_duration_ms + 500) / 1000
    )
}
