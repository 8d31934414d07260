//! Outbound command set.

use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue, RawField};

/// Commands the device sends to the companion application.
///
/// Every command is a single-field frame whose payload is the constant `1`;
/// the field key alone carries the meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Announce that the device UI is up
    AppReady,
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Stop playback
    Stop,
    /// Raise the player volume one step
    VolumeUp,
    /// Lower the player volume one step
    VolumeDown,
    /// Jump to the previous track
    PreviousTrack,
    /// Jump to the next track
    NextTrack,
    /// Request a full status report
    GetStatus,
}

impl Command {
    /// The message key this command is sent under.
    pub fn field_id(self) -> FieldId {
        match self {
            Command::AppReady => FieldId::AppReady,
            Command::Play => FieldId::Play,
            Command::Pause => FieldId::Pause,
            Command::Stop => FieldId::Stop,
            Command::VolumeUp => FieldId::VolumeUp,
            Command::VolumeDown => FieldId::VolumeDown,
            Command::PreviousTrack => FieldId::PreviousTrack,
            Command::NextTrack => FieldId::NextTrack,
            Command::GetStatus => FieldId::GetStatus,
        }
    }

    /// Encode into the single wire field that makes up a command frame.
    pub fn encode(self) -> RawField {
        RawField {
            id: self.field_id() as u32,
            value: FieldValue::Int(1),
        }
    }
}
