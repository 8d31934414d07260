//! Inbound status ingestion and reconciliation.

use remote_protocol::{PlayState, RawField, StatusField, TransportCode};

use crate::model::DeviceStatus;

/// What a processed batch asks the caller to do next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// At least one observable field changed; a refresh should be coalesced
    pub dirty: bool,
    /// The companion signalled readiness; a status request should go out
    pub status_requested: bool,
}

/// Apply one inbound field batch to the device status.
///
/// The batch is walked exactly once. Each field decodes independently: an
/// unknown or malformed field is logged and skipped without aborting the
/// rest of the batch. An error field forces [`PlayState::Error`] for the
/// whole batch, regardless of any play-state field decoded alongside it,
/// and leaves its text in `status_text`; otherwise a dirty batch clears
/// `status_text` so the renderer derives the line from the play state.
pub fn apply_batch(status: &mut DeviceStatus, fields: &[RawField]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let mut error_text: Option<String> = None;

    for raw in fields {
        let field = match StatusField::decode(raw) {
            Ok(field) => field,
            Err(err) => {
                tracing::warn!(id = raw.id, %err, "skipping undecodable status field");
                continue;
            }
        };

        match field {
            StatusField::JsReady => outcome.status_requested = true,
            StatusField::PlayState(state) => outcome.dirty |= status.set_play_state(state),
            StatusField::Volume(volume) => outcome.dirty |= status.set_volume(volume),
            StatusField::MuteState(muted) => outcome.dirty |= status.set_muted(muted),
            StatusField::ErrorMessage(text) => {
                error_text = Some(text);
            }
            StatusField::ConfigIpAddress(address) => {
                tracing::info!(%address, "companion acknowledged player address");
            }
            StatusField::TrackTitle(text) => outcome.dirty |= status.set_track_title(&text),
            StatusField::ArtistName(text) => outcome.dirty |= status.set_artist_name(&text),
            StatusField::AlbumName(text) => outcome.dirty |= status.set_album_name(&text),
        }
    }

    if let Some(text) = error_text {
        // The error field outranks any play state seen in the same batch.
        status.set_play_state(PlayState::Error);
        if text.is_empty() {
            status.set_status_text("Error");
        } else {
            status.set_status_text(&text);
        }
        outcome.dirty = true;
    } else if outcome.dirty {
        status.clear_status_text();
    }

    outcome
}

/// Surface a transport-level inbound drop into the device status.
///
/// Terminal for that delivery: no retry is issued here. Recovery waits for
/// the next poll tick or user action.
pub fn note_inbound_dropped(status: &mut DeviceStatus, code: TransportCode) {
    tracing::error!(code = code as u16, "inbound message dropped");
    status.set_play_state(PlayState::Error);
    status.set_status_text(&format!("Error: RX Drop {}", code as u16));
}

/// Surface a failed command send into the device status.
pub fn note_send_failed(status: &mut DeviceStatus, code: TransportCode) {
    tracing::error!(%code, "command send failed");
    status.set_play_state(PlayState::Error);
    status.set_status_text(&format!("Error: TX Fail {code}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_protocol::{FieldId, FieldValue};

    #[test]
    fn test_initial_batch_marks_dirty() {
        let mut status = DeviceStatus::new();
        let fields = [
            RawField::int(FieldId::PlayState, PlayState::Playing.wire_value()),
            RawField::int(FieldId::Volume, 40),
        ];

        let outcome = apply_batch(&mut status, &fields);

        assert!(outcome.dirty);
        assert!(!outcome.status_requested);
        assert_eq!(status.play_state(), PlayState::Playing);
        assert_eq!(status.volume(), Some(40));
    }

    #[test]
    fn test_unchanged_batch_is_clean() {
        let mut status = DeviceStatus::new();
        let fields = [RawField::int(FieldId::Volume, 40)];
        assert!(apply_batch(&mut status, &fields).dirty);
        assert!(!apply_batch(&mut status, &fields).dirty);
    }

    #[test]
    fn test_unknown_field_does_not_abort_batch() {
        let mut status = DeviceStatus::new();
        let fields = [
            RawField {
                id: 99,
                value: FieldValue::Int(1),
            },
            RawField::text(FieldId::TrackTitle, "Still Applied"),
        ];

        let outcome = apply_batch(&mut status, &fields);

        assert!(outcome.dirty);
        assert_eq!(status.track_title(), "Still Applied");
    }

    #[test]
    fn test_malformed_field_does_not_mutate_status() {
        let mut status = DeviceStatus::new();
        let fields = [
            RawField::int(FieldId::Volume, 400),
            RawField::text(FieldId::PlayState, "PLAYING"),
        ];

        let outcome = apply_batch(&mut status, &fields);

        assert!(!outcome.dirty);
        assert_eq!(status.volume(), None);
        assert_eq!(status.play_state(), PlayState::Unknown);
    }

    #[test]
    fn test_error_field_overrides_play_state_in_same_batch() {
        let mut status = DeviceStatus::new();
        let fields = [
            RawField::text(FieldId::ErrorMessage, "Network error"),
            RawField::int(FieldId::PlayState, PlayState::Playing.wire_value()),
        ];

        let outcome = apply_batch(&mut status, &fields);

        assert!(outcome.dirty);
        assert_eq!(status.play_state(), PlayState::Error);
        assert_eq!(status.status_text(), "Network error");
    }

    #[test]
    fn test_empty_error_text_gets_default_literal() {
        let mut status = DeviceStatus::new();
        let fields = [RawField::text(FieldId::ErrorMessage, "")];

        let outcome = apply_batch(&mut status, &fields);

        assert!(outcome.dirty);
        assert_eq!(status.play_state(), PlayState::Error);
        assert_eq!(status.status_text(), "Error");
    }

    #[test]
    fn test_dirty_batch_without_error_clears_status_text() {
        let mut status = DeviceStatus::new();
        apply_batch(&mut status, &[RawField::text(FieldId::ErrorMessage, "boom")]);
        assert_eq!(status.status_text(), "boom");

        apply_batch(
            &mut status,
            &[RawField::int(FieldId::PlayState, PlayState::Playing.wire_value())],
        );
        assert_eq!(status.play_state(), PlayState::Playing);
        assert_eq!(status.status_text(), "");
    }

    #[test]
    fn test_js_ready_requests_status() {
        let mut status = DeviceStatus::new();
        let outcome = apply_batch(&mut status, &[RawField::int(FieldId::JsReady, 1)]);
        assert!(outcome.status_requested);
        assert!(!outcome.dirty);
    }

    #[test]
    fn test_ip_acknowledgment_is_ignored() {
        let mut status = DeviceStatus::new();
        let outcome = apply_batch(
            &mut status,
            &[RawField::text(FieldId::ConfigIpAddress, "10.0.0.5")],
        );
        assert!(!outcome.dirty);
        assert_eq!(status.play_state(), PlayState::Unknown);
    }

    #[test]
    fn test_confirmation_overwrites_optimistic_guess() {
        let mut status = DeviceStatus::new();
        status.set_play_state(PlayState::Transitioning);

        apply_batch(
            &mut status,
            &[RawField::int(FieldId::PlayState, PlayState::Playing.wire_value())],
        );
        assert_eq!(status.play_state(), PlayState::Playing);
    }

    #[test]
    fn test_inbound_drop_diagnostic() {
        let mut status = DeviceStatus::new();
        note_inbound_dropped(&mut status, TransportCode::SendTimeout);
        assert_eq!(status.play_state(), PlayState::Error);
        assert_eq!(status.status_text(), "Error: RX Drop 2");
    }

    #[test]
    fn test_send_failure_diagnostic() {
        let mut status = DeviceStatus::new();
        note_send_failed(&mut status, TransportCode::NotConnected);
        assert_eq!(status.play_state(), PlayState::Error);
        assert_eq!(status.status_text(), "Error: TX Fail Not Connected");
    }
}
