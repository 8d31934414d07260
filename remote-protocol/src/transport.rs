//! Transport result taxonomy.

use serde::{Deserialize, Serialize};

/// Result codes reported by the message transport.
///
/// Discriminants and labels follow the platform's own reporting so
/// diagnostics shown on the device match what the transport logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TransportCode {
    #[error("Send Timeout")]
    SendTimeout = 2,
    #[error("Send Rejected")]
    SendRejected = 4,
    #[error("Not Connected")]
    NotConnected = 8,
    #[error("App Not Running")]
    AppNotRunning = 16,
    #[error("Invalid Args")]
    InvalidArgs = 32,
    #[error("Busy")]
    Busy = 64,
    #[error("Buffer Overflow")]
    BufferOverflow = 128,
    #[error("Already Released")]
    AlreadyReleased = 512,
    #[error("Callback Registered")]
    CallbackAlreadyRegistered = 1024,
    #[error("Callback Not Registered")]
    CallbackNotRegistered = 2048,
    #[error("Out of Memory")]
    OutOfMemory = 4096,
    #[error("Closed")]
    Closed = 8192,
    #[error("Internal Error")]
    InternalError = 16384,
    #[error("Unknown Error")]
    Unknown = 0,
}

/// A send attempt failed at the transport layer.
///
/// Exactly one attempt is ever made per frame; recovery is left to the
/// next user action or status poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Transport send failed: {code}")]
pub struct TransportError {
    /// The classified failure
    pub code: TransportCode,
}

impl From<TransportCode> for TransportError {
    fn from(code: TransportCode) -> Self {
        Self { code }
    }
}
