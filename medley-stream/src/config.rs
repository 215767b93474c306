//! Observer configuration.

use std::time::Duration;

/// Tuning for a [`PlaybackObserver`](crate::PlaybackObserver).
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    /// How long to wait after the last notification in a burst before
    /// evaluating. Backends fire several notifications per logical change;
    /// the window coalesces them into one evaluation.
    /// Default: 50 ms
    pub debounce_window: Duration,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(50),
        }
    }
}

impl ObserverConfig {
    /// Config with a custom debounce window. Mostly useful in tests, which
    /// shrink the window to keep wall-clock time down.
    pub fn with_debounce_window(window: Duration) -> Self {
        Self { debounce_window: window }
    }
}
