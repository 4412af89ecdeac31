//! Coalesces bursts of redraw triggers into a single deferred repaint.

use std::time::{Duration, Instant};
use tracing::trace;

/// One-shot debounce timer. At most one deadline is pending at any time:
/// scheduling again replaces (cancels) the previous one.
#[derive(Clone, Debug)]
pub struct RedrawScheduler {
    delay: Duration,
    deadline: Option<Instant>,
    scheduled: u64,
    cancelled: u64,
    fired: u64,
}

impl RedrawScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            scheduled: 0,
            cancelled: 0,
            fired: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant) {
        if self.deadline.take().is_some() {
            self.cancelled += 1;
            trace!("Replacing pending redraw timer");
        }
        self.deadline = Some(now + self.delay);
        self.scheduled += 1;
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) -> bool {
        let had = self.deadline.take().is_some();
        if had {
            self.cancelled += 1;
            trace!("Cancelled pending redraw timer");
        }
        had
    }

    /// Fires at most once per scheduled deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.fired += 1;
                trace!("Redraw timer fired");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }

    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}
