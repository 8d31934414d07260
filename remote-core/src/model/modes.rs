//! Transient UI mode enumerations

use serde::{Deserialize, Serialize};

/// How the secondary button pair is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonMode {
    /// Buttons adjust volume
    Volume,
    /// Buttons skip tracks
    Track,
}

impl Default for ButtonMode {
    fn default() -> Self {
        ButtonMode::Volume
    }
}

/// What the bottom display area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Track/progress content
    Track,
    /// Transient volume overlay
    Volume,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Track
    }
}
