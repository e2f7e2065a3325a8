//! Face Observation Stream
//!
//! Types and sources for per-frame face/eye-openness observations:
//! - Observation data model (one reading per processed video frame)
//! - Permission/availability signalling from the detection provider
//! - Scripted replay source for tests and headless runs

pub mod observation;
pub mod source;

pub use observation::{FaceReading, Observation};
pub use source::{FaceSource, PermissionState, ScriptedSource};

use thiserror::Error;

/// Face source error types
#[derive(Error, Debug)]
pub enum FaceSourceError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Detection provider unavailable: {0}")]
    Unavailable(String),

    #[error("Streaming error: {0}")]
    Stream(String),
}
