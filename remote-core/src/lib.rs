//! Device-control synchronization core
//!
//! The logic of a wearable remote for a networked audio player: reconciling
//! authoritative status from the companion application with optimistic local
//! guesses, interpreting buttons through transient modes, and coalescing
//! bursts of change into single render passes. Everything runs as one
//! event-loop task; no callback ever blocks, and state is only touched from
//! the currently-running event turn.
//!
//! # Architecture
//!
//! ```text
//! Inbound fields ──► ingest ──► DeviceStatus ──► RefreshScheduler ──► Renderer
//! Buttons ─────────► modes / playback ──► CommandDispatcher ──► Transport
//! StatusPoller ────► CommandDispatcher (GetStatus, fixed cadence)
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use remote_core::{Controller, Event, RemoteConfig};
//! use tokio::sync::mpsc;
//!
//! let (events, rx) = mpsc::channel(32);
//! let controller = Controller::new(RemoteConfig::default(), transport, renderer);
//! tokio::spawn(controller.run(rx));
//!
//! // Hosts feed the loop from their own callbacks:
//! events.send(Event::StatusBatch(fields)).await?;
//! ```

pub mod button_mode;
pub mod config;
pub mod dispatch;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod playback;
pub mod poller;
pub mod refresh;
pub mod render;

mod controller;
mod timer;

pub use button_mode::ButtonModeController;
pub use config::RemoteConfig;
pub use controller::{ButtonPress, Controller, Event};
pub use dispatch::{CommandDispatcher, Transport};
pub use ingest::BatchOutcome;
pub use model::{ButtonMode, DeviceStatus, DisplayMode};
pub use overlay::VolumeDisplayController;
pub use refresh::RefreshScheduler;
pub use render::{Renderer, ViewState};

// Protocol types hosts need to feed and wire up the core.
pub use remote_protocol::{
    Command, FieldId, FieldValue, PlayState, RawField, StatusField, TransportCode, TransportError,
};
