//! Alarm playback abstraction

use thiserror::Error;

/// Alarm playback error types
#[derive(Error, Debug)]
pub enum AlarmError {
    #[error("Playback device busy")]
    DeviceBusy,

    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Looping alarm sound player.
///
/// The playback device is exclusively owned by the active session's
/// dispatcher; only one monitor drives it at a time.
pub trait AlarmPlayer {
    /// Start looping playback of the alarm sound
    fn start_loop(&mut self) -> Result<(), AlarmError>;

    /// Stop playback
    fn stop(&mut self) -> Result<(), AlarmError>;
}

/// No-op player for tests and headless runs
#[derive(Debug, Default)]
pub struct SilentPlayer {
    playing: bool,
}

impl SilentPlayer {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AlarmPlayer for SilentPlayer {
    fn start_loop(&mut self) -> Result<(), AlarmError> {
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlarmError> {
        self.playing = false;
        Ok(())
    }
}
