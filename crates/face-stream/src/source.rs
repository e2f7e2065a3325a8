//! Observation sources

use std::collections::VecDeque;

use tracing::debug;

use crate::{FaceSourceError, Observation};

/// Camera permission state reported by the detection provider.
///
/// `Denied` means no observations will ever arrive; a monitor fed by a denied
/// source simply idles in its initial state. That is a valid waiting state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    NotDetermined,
    Granted,
    Denied,
}

/// Supplier of per-frame observations, polled at a fixed sampling cadence.
pub trait FaceSource {
    /// Current permission/availability state
    fn permission(&self) -> PermissionState;

    /// Produce the observation for the current sample instant.
    ///
    /// A dropped or missing frame is reported as a no-face observation,
    /// never an error. Errors are reserved for the provider itself failing.
    fn sample(&mut self, now_ms: u64) -> Result<Observation, FaceSourceError>;
}

/// Replays a prerecorded observation sequence.
///
/// Stands in for the camera-backed detector in tests and headless runs.
/// An exhausted script keeps yielding no-face observations.
pub struct ScriptedSource {
    frames: VecDeque<Observation>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Observation>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet replayed
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FaceSource for ScriptedSource {
    fn permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    fn sample(&mut self, now_ms: u64) -> Result<Observation, FaceSourceError> {
        Ok(self.frames.pop_front().unwrap_or_else(|| {
            debug!(now_ms, "script exhausted; yielding no-face frame");
            Observation::no_face(now_ms)
        }))
    }
}
