//! Trigger debouncing.

use std::time::{Duration, Instant};

/// Collapses key repeat and near-simultaneous trigger events into a single
/// pipeline run. The cooldown is measured from the previous *accepted*
/// trigger, not the previous raw keypress.
pub struct DebounceGate {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl DebounceGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    /// Whether a trigger observed at `now` should run. The timestamp is
    /// recorded only when the answer is yes.
    pub fn should_proceed(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.cooldown {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
