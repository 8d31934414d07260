//! Transient volume overlay for the bottom display area.

use std::time::Duration;

use tokio::time::Instant;

use crate::model::DisplayMode;
use crate::timer::Deadline;

/// Governs whether the bottom area shows track content or the volume
/// overlay.
///
/// A volume action switches to the overlay and extends the revert window;
/// consecutive actions keep pushing the deadline out rather than firing
/// early or arming a second timer.
#[derive(Debug)]
pub struct VolumeDisplayController {
    mode: DisplayMode,
    revert_after: Duration,
    revert: Deadline,
}

impl VolumeDisplayController {
    pub fn new(revert_after: Duration) -> Self {
        Self {
            mode: DisplayMode::default(),
            revert_after,
            revert: Deadline::idle(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// When the pending revert fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.revert.get()
    }

    /// A volume adjustment happened: show the overlay and extend the
    /// revert window.
    pub fn note_volume_action(&mut self) {
        self.mode = DisplayMode::Volume;
        self.revert.arm(self.revert_after);
    }

    /// The revert deadline fired. Returns true if the display actually
    /// reverted to track content.
    pub fn on_revert_due(&mut self) -> bool {
        self.revert.cancel();
        if self.mode == DisplayMode::Volume {
            self.mode = DisplayMode::Track;
            tracing::debug!("volume overlay reverted to track display");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVERT: Duration = Duration::from_secs(3);

    #[test]
    fn test_starts_showing_track() {
        let controller = VolumeDisplayController::new(REVERT);
        assert_eq!(controller.mode(), DisplayMode::Track);
        assert_eq!(controller.deadline(), None);
    }

    #[test]
    fn test_volume_action_shows_overlay() {
        let mut controller = VolumeDisplayController::new(REVERT);
        controller.note_volume_action();
        assert_eq!(controller.mode(), DisplayMode::Volume);
        assert!(controller.deadline().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_actions_extend_window() {
        let mut controller = VolumeDisplayController::new(REVERT);
        controller.note_volume_action();
        let first = controller.deadline().unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;
        controller.note_volume_action();
        let second = controller.deadline().unwrap();

        // t=0 and t=2s actions revert at t=5s, not t=3s.
        assert_eq!(second - first, Duration::from_secs(2));
    }

    #[test]
    fn test_revert_fires_once() {
        let mut controller = VolumeDisplayController::new(REVERT);
        controller.note_volume_action();
        assert!(controller.on_revert_due());
        assert_eq!(controller.mode(), DisplayMode::Track);
        assert!(!controller.on_revert_due());
    }
}
