//! Playback state enumeration

use serde::{Deserialize, Serialize};

/// Playback state reported by (or guessed ahead of) the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// Nothing queued or playback stopped
    Stopped,
    /// Currently playing audio
    Playing,
    /// Playback is paused
    Paused,
    /// Transitioning between states
    Transitioning,
    /// The player or the channel to it is in error
    Error,
    /// No status received yet
    Unknown,
}

impl PlayState {
    /// Parse from the wire encoding used by the companion application.
    ///
    /// Returns `None` for values outside the enumerated set so a malformed
    /// field can be rejected without touching current state.
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(PlayState::Stopped),
            1 => Some(PlayState::Playing),
            2 => Some(PlayState::Paused),
            3 => Some(PlayState::Transitioning),
            4 => Some(PlayState::Error),
            5 => Some(PlayState::Unknown),
            _ => None,
        }
    }

    /// The wire encoding of this state.
    pub fn wire_value(self) -> i32 {
        match self {
            PlayState::Stopped => 0,
            PlayState::Playing => 1,
            PlayState::Paused => 2,
            PlayState::Transitioning => 3,
            PlayState::Error => 4,
            PlayState::Unknown => 5,
        }
    }
}

impl Default for PlayState {
    fn default() -> Self {
        PlayState::Unknown
    }
}
