//! Idle auto-hide timer.
//!
//! The host drives time: it passes a monotonic millisecond clock into every
//! call and polls the timer from its frame or message loop. There is at most
//! one pending deadline; scheduling again replaces it.

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// A single pending deadline after which the pointer hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    delay_ms: u64,
    deadline: Option<Millis>,
}

impl HideTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Restart the countdown from `now`, dropping any earlier deadline.
    pub fn schedule(&mut self, now: Millis) {
        self.deadline = Some(now.saturating_add(self.delay_ms));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }
}
