//! Error types for protocol decode failures.

use crate::field::FieldId;

/// A single field failed to decode.
///
/// These are never batch-fatal: the ingestion side logs the failure and
/// moves on to the next field in the same message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field key is not in the recognized schema
    #[error("Unknown field id: {0}")]
    UnknownId(u32),

    /// The field key is valid but its payload has the wrong type
    #[error("Field {id:?} carried an unexpected payload type")]
    WrongType {
        /// The field that failed
        id: FieldId,
    },

    /// An integer payload was outside the valid range for its field
    #[error("Field {id:?} value {value} is out of range")]
    OutOfRange {
        /// The field that failed
        id: FieldId,
        /// The rejected payload
        value: i32,
    },

    /// An outbound command key arrived on the inbound status path
    #[error("Command field {0:?} received on the status path")]
    UnexpectedCommand(FieldId),
}
