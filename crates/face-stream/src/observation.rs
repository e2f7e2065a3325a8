//! Per-frame face observation types

use serde::{Deserialize, Serialize};

/// Eye-openness probabilities reported for one detected face.
///
/// Probabilities are in [0, 1]. A probability the detector did not report is
/// carried as `None` and normalized to 0.0 (eyes-closed-leaning) rather than
/// rejected; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceReading {
    /// Left eye openness probability
    pub left_eye_open: Option<f32>,
    /// Right eye openness probability
    pub right_eye_open: Option<f32>,
}

impl FaceReading {
    /// Create a reading with both probabilities present
    pub fn new(left_eye_open: f32, right_eye_open: f32) -> Self {
        Self {
            left_eye_open: Some(left_eye_open),
            right_eye_open: Some(right_eye_open),
        }
    }

    /// Left eye openness, normalized into [0, 1]
    pub fn left_openness(&self) -> f32 {
        normalize(self.left_eye_open)
    }

    /// Right eye openness, normalized into [0, 1]
    pub fn right_openness(&self) -> f32 {
        normalize(self.right_eye_open)
    }
}

fn normalize(prob: Option<f32>) -> f32 {
    prob.filter(|p| p.is_finite())
        .map(|p| p.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

/// One frame's face/eye-openness reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Monotonic capture time (milliseconds)
    pub timestamp_ms: u64,
    /// Detected face, `None` when no face was found in the frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<FaceReading>,
}

impl Observation {
    /// Observation with a detected face and both eye probabilities
    pub fn face(timestamp_ms: u64, left_eye_open: f32, right_eye_open: f32) -> Self {
        Self {
            timestamp_ms,
            face: Some(FaceReading::new(left_eye_open, right_eye_open)),
        }
    }

    /// Observation for a frame with no detected face
    pub fn no_face(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            face: None,
        }
    }

    /// Whether a face was detected in this frame
    pub fn face_detected(&self) -> bool {
        self.face.is_some()
    }
}
