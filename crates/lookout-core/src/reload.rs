use std::time::{Duration, Instant};

/// Re-arms the session watch a fixed delay after a connection loss.
///
/// Enabled state and delay are injected at construction; `set_enabled` is the
/// runtime escape hatch. The guard arms at most one deadline per loss and
/// fires at most once per arming.
#[derive(Debug)]
pub struct ReloadGuard {
    enabled: bool,
    delay: Duration,
    deadline: Option<Instant>,
}

impl ReloadGuard {
    pub fn new(enabled: bool, delay: Duration) -> Self {
        Self {
            enabled,
            delay,
            deadline: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runtime toggle. Disabling cancels a pending reload.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.deadline = None;
        }
    }

    /// A connection loss was observed at `now`.
    pub fn connection_lost(&mut self, now: Instant) {
        if self.enabled && self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// The connection came back on its own; nothing left to do.
    pub fn connection_restored(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds until the pending reload, rounded up.
    pub fn remaining_secs(&self, now: Instant) -> Option<u64> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now).as_secs_f32().ceil() as u64)
    }

    /// True exactly once when the armed deadline has passed.
    pub fn take_reload(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
