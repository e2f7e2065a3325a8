//! Monitoring session loop

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alerting::{AlarmPlayer, AlertDispatcher};
use eye_monitor::EyeStateMonitor;
use face_stream::{FaceSource, Observation, PermissionState};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;

/// Session control commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Pause or resume observation delivery
    Toggle,
    /// Stop the session
    Stop,
}

/// One monitoring session: a source, a monitor, and the alert sinks.
///
/// Observations flow through `tick` one at a time, in timestamp order, from
/// the single sampling loop. The monitor state lives and dies with the
/// session; pausing discards it rather than preserving a partial run.
pub struct MonitorSession<S: FaceSource, P: AlarmPlayer> {
    id: Uuid,
    config: SessionConfig,
    source: S,
    monitor: EyeStateMonitor,
    dispatcher: AlertDispatcher<P>,
    paused: bool,
}

impl<S: FaceSource, P: AlarmPlayer> MonitorSession<S, P> {
    pub fn new(config: SessionConfig, source: S, player: P) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, ?config, "creating monitoring session");
        Self {
            id,
            monitor: EyeStateMonitor::new(config.monitor_config()),
            dispatcher: AlertDispatcher::new(player),
            source,
            config,
            paused: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn dispatcher(&self) -> &AlertDispatcher<P> {
        &self.dispatcher
    }

    /// One sampling step at wall-clock time `now_ms`.
    ///
    /// While paused, samples are dropped entirely. A failed sample is
    /// absorbed as a no-face observation so it interrupts any closed run
    /// instead of silently sustaining an alarm.
    pub fn tick(&mut self, now_ms: u64) {
        if self.paused {
            return;
        }

        let obs = match self.source.sample(now_ms) {
            Ok(obs) => obs,
            Err(e) => {
                warn!(session_id = %self.id, "observation sampling failed: {}", e);
                Observation::no_face(now_ms)
            }
        };

        if let Some(event) = self.monitor.process_observation(&obs, now_ms) {
            self.dispatcher.dispatch(event);
        }
    }

    /// Pause or resume monitoring.
    ///
    /// Pausing clears any active alert immediately and discards the
    /// closed-run state; resuming starts from a fresh monitor.
    pub fn toggle(&mut self) {
        if self.paused {
            self.paused = false;
            self.monitor = EyeStateMonitor::new(self.config.monitor_config());
            info!(session_id = %self.id, "monitoring resumed");
        } else {
            self.paused = true;
            self.cancel_alert();
            info!(session_id = %self.id, "monitoring paused");
        }
    }

    /// Cancel alarm side effects before the session state is dropped.
    pub fn shutdown(&mut self) {
        self.cancel_alert();
        info!(session_id = %self.id, "monitoring session stopped");
    }

    fn cancel_alert(&mut self) {
        if let Some(event) = self.monitor.force_clear() {
            self.dispatcher.dispatch(event);
        }
    }

    /// Run the sampling loop until a `Stop` command arrives (or the command
    /// channel closes), using wall-clock timestamps at the configured
    /// cadence.
    ///
    /// A denied permission means no observations ever arrive; the session
    /// waits in its initial state until stopped. That is a valid idle state,
    /// not an error.
    pub async fn run(&mut self, mut commands: mpsc::Receiver<SessionCommand>) {
        if self.source.permission() == PermissionState::Denied {
            warn!(session_id = %self.id, "camera permission denied; waiting without observations");
            while let Some(cmd) = commands.recv().await {
                if cmd == SessionCommand::Stop {
                    break;
                }
            }
            self.shutdown();
            return;
        }

        info!(
            session_id = %self.id,
            interval_ms = self.config.sample_interval_ms,
            "starting sampling loop"
        );
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.sample_interval_ms));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick(epoch_ms());
                }
                cmd = commands.recv() => {
                    match cmd {
                        Some(SessionCommand::Toggle) => self.toggle(),
                        Some(SessionCommand::Stop) | None => break,
                    }
                }
            }
        }

        self.shutdown();
    }
}

/// Wall-clock time in epoch milliseconds
fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::SilentPlayer;
    use face_stream::{FaceSourceError, ScriptedSource};

    fn closed_run(start_ms: u64, end_ms: u64, step_ms: u64) -> Vec<Observation> {
        (start_ms..=end_ms)
            .step_by(step_ms as usize)
            .map(|t| Observation::face(t, 0.05, 0.05))
            .collect()
    }

    fn drive(session: &mut MonitorSession<ScriptedSource, SilentPlayer>, times: &[u64]) {
        for &t in times {
            session.tick(t);
        }
    }

    #[test]
    fn test_alert_raised_and_audible_through_session() {
        let frames = closed_run(0, 2000, 100);
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(frames),
            SilentPlayer::default(),
        );

        let times: Vec<u64> = (0..=2000).step_by(100).collect();
        drive(&mut session, &times);

        assert!(session.dispatcher().player().is_playing());
        assert_eq!(
            session.dispatcher().overlay_text(),
            Some("Eyes closed for 2 seconds")
        );
    }

    #[test]
    fn test_pause_clears_active_alert() {
        let frames = closed_run(0, 2000, 100);
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(frames),
            SilentPlayer::default(),
        );

        let times: Vec<u64> = (0..=2000).step_by(100).collect();
        drive(&mut session, &times);
        assert!(session.dispatcher().alert_visible());

        session.toggle();

        assert!(session.is_paused());
        assert!(!session.dispatcher().player().is_playing());
        assert!(!session.dispatcher().alert_visible());
    }

    #[test]
    fn test_paused_session_drops_samples() {
        let frames = closed_run(0, 1000, 100);
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(frames),
            SilentPlayer::default(),
        );

        session.toggle();
        session.tick(0);
        session.tick(100);

        // Nothing consumed, nothing dispatched.
        assert!(!session.dispatcher().alert_visible());
    }

    #[test]
    fn test_resume_starts_from_fresh_state() {
        // 1500 ms of closed eyes, a pause/resume, then more closed eyes: the
        // pre-pause run must not count toward the threshold.
        let mut frames = closed_run(0, 1500, 100);
        frames.extend(closed_run(3000, 5000, 100));
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(frames),
            SilentPlayer::default(),
        );

        let times: Vec<u64> = (0..=1500).step_by(100).collect();
        drive(&mut session, &times);
        session.toggle();
        session.toggle();

        let times: Vec<u64> = (3000..=4900).step_by(100).collect();
        drive(&mut session, &times);
        assert!(!session.dispatcher().alert_visible());

        // One more closed frame crosses the fresh threshold at 3000+2000.
        session.tick(5000);
        assert!(session.dispatcher().alert_visible());
    }

    #[test]
    fn test_shutdown_cancels_alarm() {
        let frames = closed_run(0, 2000, 100);
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(frames),
            SilentPlayer::default(),
        );

        let times: Vec<u64> = (0..=2000).step_by(100).collect();
        drive(&mut session, &times);
        assert!(session.dispatcher().player().is_playing());

        session.shutdown();

        assert!(!session.dispatcher().player().is_playing());
        assert!(!session.dispatcher().alert_visible());
    }

    #[test]
    fn test_sampling_failure_interrupts_run() {
        /// Source that fails after its script runs out
        struct FlakySource {
            inner: ScriptedSource,
        }

        impl FaceSource for FlakySource {
            fn permission(&self) -> PermissionState {
                PermissionState::Granted
            }

            fn sample(&mut self, now_ms: u64) -> Result<Observation, FaceSourceError> {
                if self.inner.remaining() == 0 {
                    return Err(FaceSourceError::Stream("frame queue starved".into()));
                }
                self.inner.sample(now_ms)
            }
        }

        let source = FlakySource {
            inner: ScriptedSource::new(closed_run(0, 2000, 100)),
        };
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            source,
            SilentPlayer::default(),
        );

        let times: Vec<u64> = (0..=2000).step_by(100).collect();
        for &t in &times {
            session.tick(t);
        }
        assert!(session.dispatcher().alert_visible());

        // The source now errors; the failed sample reads as no-face and
        // clears the alarm instead of sustaining it.
        session.tick(2100);
        assert!(!session.dispatcher().alert_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_command() {
        let mut session = MonitorSession::new(
            SessionConfig::default(),
            ScriptedSource::new(closed_run(0, 1000, 100)),
            SilentPlayer::default(),
        );

        let (tx, rx) = mpsc::channel(4);
        tx.send(SessionCommand::Stop).await.unwrap();

        session.run(rx).await;

        assert!(!session.dispatcher().alert_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_idles_when_permission_denied() {
        /// Source for a provider whose permission was denied
        struct DeniedSource;

        impl FaceSource for DeniedSource {
            fn permission(&self) -> PermissionState {
                PermissionState::Denied
            }

            fn sample(&mut self, _now_ms: u64) -> Result<Observation, FaceSourceError> {
                Err(FaceSourceError::PermissionDenied)
            }
        }

        let mut session = MonitorSession::new(
            SessionConfig::default(),
            DeniedSource,
            SilentPlayer::default(),
        );

        let (tx, rx) = mpsc::channel(4);
        tx.send(SessionCommand::Stop).await.unwrap();

        session.run(rx).await;

        // Initial state throughout: no alert was ever raised.
        assert!(!session.dispatcher().alert_visible());
        assert!(!session.dispatcher().player().is_playing());
    }
}
