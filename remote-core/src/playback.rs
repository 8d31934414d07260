//! Optimistic playback transitions.

use remote_protocol::{Command, PlayState};

/// An optimistic transition: the state applied locally before the companion
/// confirms, and the command that asks the player for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub next: PlayState,
    pub command: Command,
}

/// Resolve a play/pause toggle against the current state.
///
/// The local guess is applied immediately for responsiveness; the next
/// authoritative status batch overwrites it unconditionally, last write
/// wins. There is no rollback timer if confirmation never arrives.
/// Unknown and Error have no meaningful toggle and yield nothing.
pub fn toggle(current: PlayState) -> Option<Toggle> {
    match current {
        PlayState::Playing | PlayState::Transitioning => Some(Toggle {
            next: PlayState::Paused,
            command: Command::Pause,
        }),
        PlayState::Paused | PlayState::Stopped => Some(Toggle {
            next: PlayState::Transitioning,
            command: Command::Play,
        }),
        PlayState::Unknown | PlayState::Error => None,
    }
}
