//! Periodic status polling.

use std::time::Duration;

use remote_protocol::Command;
use tokio::time::Instant;

use crate::timer::Deadline;

/// Issues a status request immediately and then on a fixed cadence.
///
/// `start` is idempotent: any pending cycle is dropped and a fresh one
/// begins. The poller only decides *when* to ask; the controller owns the
/// actual send.
#[derive(Debug)]
pub struct StatusPoller {
    interval: Duration,
    next: Deadline,
}

impl StatusPoller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Deadline::idle(),
        }
    }

    /// Begin (or restart) the cycle. Returns the request to send right now.
    pub fn start(&mut self) -> Command {
        self.next.arm(self.interval);
        tracing::debug!(interval = ?self.interval, "status polling started");
        Command::GetStatus
    }

    /// Cancel the pending cycle, if any.
    pub fn stop(&mut self) {
        self.next.cancel();
        tracing::debug!("status polling stopped");
    }

    pub fn is_running(&self) -> bool {
        self.next.is_armed()
    }

    /// When the next request is due, if the cycle is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next.get()
    }

    /// The cadence fired: re-arm and return the request to send.
    pub fn on_due(&mut self) -> Command {
        self.next.arm(self.interval);
        Command::GetStatus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[test]
    fn test_start_returns_immediate_request() {
        let mut poller = StatusPoller::new(INTERVAL);
        assert!(!poller.is_running());
        assert_eq!(poller.start(), Command::GetStatus);
        assert!(poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let mut poller = StatusPoller::new(INTERVAL);
        poller.start();
        tokio::time::advance(Duration::from_secs(2)).await;
        poller.start();

        // The restarted cycle replaces the old deadline entirely.
        let due = poller.deadline().unwrap();
        assert_eq!(due - Instant::now(), INTERVAL);
    }

    #[test]
    fn test_stop_clears_cycle() {
        let mut poller = StatusPoller::new(INTERVAL);
        poller.start();
        poller.stop();
        assert!(!poller.is_running());
        assert_eq!(poller.deadline(), None);
        // Stopping again is harmless.
        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_due_rearms_cadence() {
        let mut poller = StatusPoller::new(INTERVAL);
        poller.start();
        tokio::time::advance(INTERVAL).await;
        assert_eq!(poller.on_due(), Command::GetStatus);
        assert!(poller.is_running());
        assert_eq!(poller.deadline().unwrap() - Instant::now(), INTERVAL);
    }
}
