//! Message protocol for the watch-remote audio controller
//!
//! The watch and its companion application exchange small messages made of
//! enumerated fields: a numeric key plus an integer or text payload. This
//! crate owns that schema end to end:
//!
//! - [`FieldId`]: the closed set of message keys
//! - [`RawField`] / [`FieldValue`]: the untyped tuples the transport delivers
//! - [`StatusField`]: typed decode of inbound status fields, rejecting
//!   unknown keys and malformed payloads one field at a time
//! - [`Command`]: the outbound command set and its single-field frame encode
//! - [`TransportCode`] / [`TransportError`]: the transport result taxonomy
//!
//! Decode failures are always per-field ([`FieldError`]); a batch containing
//! one bad field still yields every other field intact.

mod command;
mod error;
mod field;
mod play_state;
mod transport;

pub use command::Command;
pub use error::FieldError;
pub use field::{FieldId, FieldValue, RawField, StatusField};
pub use play_state::PlayState;
pub use transport::{TransportCode, TransportError};
