//! Outbound command dispatch.

use remote_protocol::{Command, RawField, TransportError};

/// One-shot frame delivery to the companion application.
///
/// Implementations send a single already-encoded frame and report the
/// result of that one attempt. Retrying is never their job; byte-level
/// framing lives entirely behind this boundary.
pub trait Transport {
    fn send(&mut self, frame: &[RawField]) -> Result<(), TransportError>;
}

/// Encodes commands into single-field frames and hands them to the
/// transport.
pub struct CommandDispatcher<T: Transport> {
    transport: T,
}

impl<T: Transport> CommandDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send one command frame. Exactly one attempt per call; the caller
    /// decides how a failure reaches the device status.
    pub fn send(&mut self, command: Command) -> Result<(), TransportError> {
        tracing::debug!(?command, "sending command frame");
        self.transport.send(&[command.encode()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_protocol::{FieldId, FieldValue, TransportCode};

    struct FrameLog {
        frames: Vec<Vec<RawField>>,
        fail_with: Option<TransportCode>,
    }

    impl Transport for FrameLog {
        fn send(&mut self, frame: &[RawField]) -> Result<(), TransportError> {
            if let Some(code) = self.fail_with {
                return Err(code.into());
            }
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_send_encodes_single_field_frame() {
        let mut dispatcher = CommandDispatcher::new(FrameLog {
            frames: vec![],
            fail_with: None,
        });

        dispatcher.send(Command::Pause).unwrap();

        let frames = &dispatcher.transport.frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 1);
        assert_eq!(frames[0][0].id, FieldId::Pause as u32);
        assert_eq!(frames[0][0].value, FieldValue::Int(1));
    }

    #[test]
    fn test_send_reports_classified_failure() {
        let mut dispatcher = CommandDispatcher::new(FrameLog {
            frames: vec![],
            fail_with: Some(TransportCode::NotConnected),
        });

        let err = dispatcher.send(Command::Play).unwrap_err();
        assert_eq!(err.code, TransportCode::NotConnected);
        // One attempt only: nothing was queued for retry.
        assert!(dispatcher.transport.frames.is_empty());
    }
}
