//! Alert Side-Effect Dispatch
//!
//! Reacts to monitor events: starts/stops the looping alarm sound and
//! maintains the overlay text shown while an alert is ongoing. Audio
//! failures are logged and isolated so visual alerting stays correct even
//! when playback fails.

mod dispatcher;
mod player;

pub use dispatcher::AlertDispatcher;
pub use player::{AlarmError, AlarmPlayer, SilentPlayer};
