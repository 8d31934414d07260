//! Device status owned by the synchronization core.

use remote_protocol::PlayState;
use serde::{Deserialize, Serialize};

/// Longest stored track/artist/album text, in bytes.
pub const MAX_TRACK_TEXT: usize = 31;

/// Longest stored status/error text, in bytes.
pub const MAX_STATUS_TEXT: usize = 63;

/// The device's view of the remote player.
///
/// Mutated only by status ingestion and the playback state machine, always
/// from within a single event turn. Text fields are bounded and overwritten
/// wholesale; over-long source strings are clipped to a UTF-8 boundary, not
/// rejected. Every setter reports whether it actually changed anything so
/// callers can fold the answers into a per-batch dirty flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceStatus {
    play_state: PlayState,
    volume: Option<u8>,
    muted: bool,
    track_title: String,
    artist_name: String,
    album_name: String,
    status_text: String,
}

impl DeviceStatus {
    /// A fresh status: state unknown, volume never received, empty text.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn set_play_state(&mut self, state: PlayState) -> bool {
        if self.play_state == state {
            return false;
        }
        self.play_state = state;
        true
    }

    /// Current volume, or `None` if no volume has ever been received.
    pub fn volume(&self) -> Option<u8> {
        self.volume
    }

    pub fn set_volume(&mut self, volume: u8) -> bool {
        if self.volume == Some(volume) {
            return false;
        }
        self.volume = Some(volume);
        true
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) -> bool {
        if self.muted == muted {
            return false;
        }
        self.muted = muted;
        true
    }

    pub fn track_title(&self) -> &str {
        &self.track_title
    }

    pub fn set_track_title(&mut self, title: &str) -> bool {
        replace_clipped(&mut self.track_title, title, MAX_TRACK_TEXT)
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn set_artist_name(&mut self, artist: &str) -> bool {
        replace_clipped(&mut self.artist_name, artist, MAX_TRACK_TEXT)
    }

    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    pub fn set_album_name(&mut self, album: &str) -> bool {
        replace_clipped(&mut self.album_name, album, MAX_TRACK_TEXT)
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn set_status_text(&mut self, text: &str) {
        self.status_text = clip(text, MAX_STATUS_TEXT).to_owned();
    }

    pub fn clear_status_text(&mut self) {
        self.status_text.clear();
    }

    /// Text the status area should show for the current state, if any.
    ///
    /// Error shows the stored diagnostic (or a bare "Error" if none was
    /// captured); Stopped and Unknown map to fixed lines; Playing, Paused
    /// and Transitioning show track content instead of a status line.
    pub fn display_line(&self) -> Option<String> {
        match self.play_state {
            PlayState::Error => {
                if self.status_text.is_empty() {
                    Some("Error".to_string())
                } else {
                    Some(self.status_text.clone())
                }
            }
            PlayState::Stopped => Some("Nothing playing".to_string()),
            PlayState::Unknown => Some("Connecting...".to_string()),
            PlayState::Playing | PlayState::Paused | PlayState::Transitioning => None,
        }
    }

    /// Whether track text should be visible at all.
    pub fn shows_track(&self) -> bool {
        matches!(self.play_state, PlayState::Playing | PlayState::Paused)
    }
}

/// Clip to at most `max_bytes`, backing up to a UTF-8 boundary.
fn clip(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Store the clipped source if it differs from what is already held.
fn replace_clipped(slot: &mut String, source: &str, max_bytes: usize) -> bool {
    let clipped = clip(source, max_bytes);
    if slot == clipped {
        return false;
    }
    slot.clear();
    slot.push_str(clipped);
    true
}
