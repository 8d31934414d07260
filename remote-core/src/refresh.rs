//! Debounced refresh scheduling.

use std::time::Duration;

use tokio::time::Instant;

use crate::timer::Deadline;

/// Coalesces bursts of state change into a single deferred render pass.
///
/// Scheduling while a pass is already pending pushes the deadline out
/// instead of arming a second one, so at most one refresh is outstanding
/// at any time and it observes whatever state is current when it fires.
#[derive(Debug)]
pub struct RefreshScheduler {
    debounce: Duration,
    pending: Deadline,
}

impl RefreshScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: Deadline::idle(),
        }
    }

    /// Request a render pass after the debounce window.
    pub fn schedule(&mut self) {
        self.pending.arm(self.debounce);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_armed()
    }

    /// When the pending pass fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.get()
    }

    /// The pass is about to run; forget the deadline first.
    pub fn clear(&mut self) {
        self.pending.cancel();
    }
}
