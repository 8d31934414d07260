//! Render target boundary.

use crate::model::{ButtonMode, DeviceStatus, DisplayMode};

/// Read-only view of everything a render pass may consult.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub status: &'a DeviceStatus,
    pub button_mode: ButtonMode,
    pub display_mode: DisplayMode,
}

/// The drawing side of the device UI.
///
/// The core drives these in a fixed order from the refresh scheduler and
/// only ever from within an event turn. Widget layout, icon resources and
/// actual pixels belong to the host behind this trait. `is_ready` lets a
/// host report that its widgets are torn down, which turns a pending
/// refresh into a silent no-op.
pub trait Renderer {
    fn is_ready(&self) -> bool {
        true
    }

    /// Action-bar icons: play/pause plus the secondary pair per button mode.
    fn draw_icons(&mut self, view: &ViewState<'_>);

    /// The "Volume" label that accompanies the overlay.
    fn draw_volume_overlay(&mut self, view: &ViewState<'_>);

    /// The bottom bar: volume level or track accent, per display mode.
    fn draw_volume_bar(&mut self, view: &ViewState<'_>);

    /// Title, artist and album text.
    fn draw_track_text(&mut self, view: &ViewState<'_>);

    /// The derived status line, when one applies.
    fn draw_status_text(&mut self, view: &ViewState<'_>);
}
