//! One-shot deadline bookkeeping.

use std::time::Duration;

use tokio::time::Instant;

/// A single optional deadline.
///
/// Each of the core's timers is one of these: arming again replaces the
/// previous deadline and cancelling leaves nothing to fire, so a timer can
/// never have two callbacks outstanding or a stale handle after cancel.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Deadline(Option<Instant>);

impl Deadline {
    pub fn idle() -> Self {
        Self(None)
    }

    /// Arm (or re-arm) to fire `after` from now.
    pub fn arm(&mut self, after: Duration) {
        self.0 = Some(Instant::now() + after);
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<Instant> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let deadline = Deadline::idle();
        assert!(!deadline.is_armed());
        assert_eq!(deadline.get(), None);
    }

    #[test]
    fn test_arm_and_cancel() {
        let mut deadline = Deadline::idle();
        deadline.arm(Duration::from_millis(50));
        assert!(deadline.is_armed());

        deadline.cancel();
        assert!(!deadline.is_armed());
        assert_eq!(deadline.get(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_deadline() {
        let mut deadline = Deadline::idle();
        deadline.arm(Duration::from_millis(100));
        let first = deadline.get().unwrap();

        tokio::time::advance(Duration::from_millis(40)).await;
        deadline.arm(Duration::from_millis(100));
        let second = deadline.get().unwrap();

        assert!(second > first);
        assert_eq!(second - first, Duration::from_millis(40));
    }
}
