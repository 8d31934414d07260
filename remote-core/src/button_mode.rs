//! Secondary-button mode with timed revert.

use std::time::Duration;

use tokio::time::Instant;

use crate::model::ButtonMode;
use crate::timer::Deadline;

/// Interprets the secondary button pair as volume or track controls.
///
/// Volume is the resting mode. Track mode is transient: entering it arms a
/// revert deadline, cancelling any previous one first so at most one is
/// ever pending. Toggling back to Volume drops the deadline.
#[derive(Debug)]
pub struct ButtonModeController {
    mode: ButtonMode,
    revert_after: Duration,
    revert: Deadline,
}

impl ButtonModeController {
    pub fn new(revert_after: Duration) -> Self {
        Self {
            mode: ButtonMode::default(),
            revert_after,
            revert: Deadline::idle(),
        }
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    /// When the pending revert fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.revert.get()
    }

    /// Long-press toggle. Returns the mode now in effect.
    pub fn toggle(&mut self) -> ButtonMode {
        self.revert.cancel();
        self.mode = match self.mode {
            ButtonMode::Volume => {
                self.revert.arm(self.revert_after);
                ButtonMode::Track
            }
            ButtonMode::Track => ButtonMode::Volume,
        };
        tracing::debug!(mode = ?self.mode, "button mode toggled");
        self.mode
    }

    /// The revert deadline fired. Returns true if the mode actually
    /// reverted; a fire after a manual revert is a no-op.
    pub fn on_revert_due(&mut self) -> bool {
        self.revert.cancel();
        if self.mode == ButtonMode::Track {
            self.mode = ButtonMode::Volume;
            tracing::debug!("button mode reverted to volume");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVERT: Duration = Duration::from_secs(5);

    #[test]
    fn test_starts_in_volume_with_no_deadline() {
        let controller = ButtonModeController::new(REVERT);
        assert_eq!(controller.mode(), ButtonMode::Volume);
        assert_eq!(controller.deadline(), None);
    }

    #[test]
    fn test_toggle_to_track_arms_revert() {
        let mut controller = ButtonModeController::new(REVERT);
        assert_eq!(controller.toggle(), ButtonMode::Track);
        assert!(controller.deadline().is_some());
    }

    #[test]
    fn test_toggle_back_cancels_revert() {
        let mut controller = ButtonModeController::new(REVERT);
        controller.toggle();
        assert_eq!(controller.toggle(), ButtonMode::Volume);
        assert_eq!(controller.deadline(), None);
    }

    #[test]
    fn test_revert_fires_once() {
        let mut controller = ButtonModeController::new(REVERT);
        controller.toggle();
        assert!(controller.on_revert_due());
        assert_eq!(controller.mode(), ButtonMode::Volume);
        assert_eq!(controller.deadline(), None);
        // A second fire finds nothing to do.
        assert!(!controller.on_revert_due());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retoggle_rearms_fresh_deadline() {
        let mut controller = ButtonModeController::new(REVERT);
        controller.toggle();
        let first = controller.deadline().unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;
        controller.toggle(); // back to Volume, deadline dropped
        controller.toggle(); // into Track again, fresh deadline
        let second = controller.deadline().unwrap();

        assert_eq!(second - first, Duration::from_secs(2));
    }
}
