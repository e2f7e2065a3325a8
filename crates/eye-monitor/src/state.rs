//! Per-session monitor state

/// Closed-run and alert state for one monitoring session.
///
/// Created when monitoring starts, mutated on every observation, discarded
/// when the session stops. `closed_since_ms` is reset by *any* interruption
/// (eyes open or no face), so the run it marks is continuous closed time
/// since the last such interruption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorState {
    /// Start of the current uninterrupted closed-eyes run
    pub closed_since_ms: Option<u64>,
    /// Whether a wake-up alert is currently ongoing
    pub alert_active: bool,
}
