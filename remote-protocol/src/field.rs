//! Message field schema and typed decode.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::play_state::PlayState;

/// Message keys shared with the companion application.
///
/// Keys 0-8 are outbound commands; 9-17 arrive on the status path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum FieldId {
    AppReady = 0,
    Play = 1,
    Pause = 2,
    Stop = 3,
    VolumeUp = 4,
    VolumeDown = 5,
    PreviousTrack = 6,
    NextTrack = 7,
    GetStatus = 8,
    JsReady = 9,
    PlayState = 10,
    Volume = 11,
    MuteState = 12,
    ErrorMessage = 13,
    ConfigIpAddress = 14,
    TrackTitle = 15,
    ArtistName = 16,
    AlbumName = 17,
}

impl FieldId {
    /// Whether this key belongs to the outbound command range.
    pub fn is_command(self) -> bool {
        (self as u32) <= FieldId::GetStatus as u32
    }
}

impl TryFrom<u32> for FieldId {
    type Error = FieldError;

    fn try_from(id: u32) -> Result<Self, FieldError> {
        match id {
            0 => Ok(FieldId::AppReady),
            1 => Ok(FieldId::Play),
            2 => Ok(FieldId::Pause),
            3 => Ok(FieldId::Stop),
            4 => Ok(FieldId::VolumeUp),
            5 => Ok(FieldId::VolumeDown),
            6 => Ok(FieldId::PreviousTrack),
            7 => Ok(FieldId::NextTrack),
            8 => Ok(FieldId::GetStatus),
            9 => Ok(FieldId::JsReady),
            10 => Ok(FieldId::PlayState),
            11 => Ok(FieldId::Volume),
            12 => Ok(FieldId::MuteState),
            13 => Ok(FieldId::ErrorMessage),
            14 => Ok(FieldId::ConfigIpAddress),
            15 => Ok(FieldId::TrackTitle),
            16 => Ok(FieldId::ArtistName),
            17 => Ok(FieldId::AlbumName),
            other => Err(FieldError::UnknownId(other)),
        }
    }
}

/// Untyped payload of one wire field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i32),
    Text(String),
}

/// One field as delivered by the transport, before typed decode.
///
/// The id is kept raw so unknown keys survive to the decode step, where
/// they are rejected without aborting the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    pub id: u32,
    pub value: FieldValue,
}

impl RawField {
    /// A field with a known key and integer payload.
    pub fn int(id: FieldId, value: i32) -> Self {
        Self {
            id: id as u32,
            value: FieldValue::Int(value),
        }
    }

    /// A field with a known key and text payload.
    pub fn text(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            id: id as u32,
            value: FieldValue::Text(value.into()),
        }
    }
}

/// Typed inbound status field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusField {
    /// The companion signalled readiness; the device should request status
    JsReady,
    /// Authoritative playback state
    PlayState(PlayState),
    /// Player volume, 0-100
    Volume(u8),
    /// Player mute state
    MuteState(bool),
    /// An error reported by the companion
    ErrorMessage(String),
    /// Player address acknowledgment, diagnostic only
    ConfigIpAddress(String),
    /// Current track title
    TrackTitle(String),
    /// Current artist name
    ArtistName(String),
    /// Current album name
    AlbumName(String),
}

impl StatusField {
    /// Decode one raw field into its typed form.
    ///
    /// Rejects unknown keys, command keys arriving inbound, wrong payload
    /// types, and out-of-range play states and volumes. Rejection never
    /// carries state: callers skip the field and continue the batch.
    pub fn decode(raw: &RawField) -> Result<Self, FieldError> {
        let id = FieldId::try_from(raw.id)?;
        if id.is_command() {
            return Err(FieldError::UnexpectedCommand(id));
        }
        match (id, &raw.value) {
            // The companion sends an arbitrary token; only arrival matters.
            (FieldId::JsReady, _) => Ok(StatusField::JsReady),
            (FieldId::PlayState, FieldValue::Int(value)) => PlayState::from_wire(*value)
                .map(StatusField::PlayState)
                .ok_or(FieldError::OutOfRange { id, value: *value }),
            (FieldId::Volume, FieldValue::Int(value)) if (0..=100).contains(value) => {
                Ok(StatusField::Volume(*value as u8))
            }
            (FieldId::Volume, FieldValue::Int(value)) => {
                Err(FieldError::OutOfRange { id, value: *value })
            }
            (FieldId::MuteState, FieldValue::Int(value)) => {
                Ok(StatusField::MuteState(*value != 0))
            }
            (FieldId::ErrorMessage, FieldValue::Text(text)) => {
                Ok(StatusField::ErrorMessage(text.clone()))
            }
            (FieldId::ConfigIpAddress, FieldValue::Text(text)) => {
                Ok(StatusField::ConfigIpAddress(text.clone()))
            }
            (FieldId::TrackTitle, FieldValue::Text(text)) => {
                Ok(StatusField::TrackTitle(text.clone()))
            }
            (FieldId::ArtistName, FieldValue::Text(text)) => {
                Ok(StatusField::ArtistName(text.clone()))
            }
            (FieldId::AlbumName, FieldValue::Text(text)) => {
                Ok(StatusField::AlbumName(text.clone()))
            }
            (id, _) => Err(FieldError::WrongType { id }),
        }
    }
}
