//! The single-task event loop tying the core together.
//!
//! One controller task owns the device status, the mode controllers and
//! every timer deadline. External happenings arrive as [`Event`]s over one
//! channel; timer fires are folded into the same loop with `select!`, so
//! each turn runs to completion before the next and no state is ever
//! touched across turns.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use remote_protocol::{Command, RawField, TransportCode};

use crate::button_mode::ButtonModeController;
use crate::config::RemoteConfig;
use crate::dispatch::{CommandDispatcher, Transport};
use crate::ingest;
use crate::model::{ButtonMode, DeviceStatus};
use crate::overlay::VolumeDisplayController;
use crate::playback;
use crate::poller::StatusPoller;
use crate::refresh::RefreshScheduler;
use crate::render::{Renderer, ViewState};
use crate::timer::Deadline;

/// External inputs delivered to the controller loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A batch of raw status fields arrived from the companion
    StatusBatch(Vec<RawField>),
    /// The transport dropped an inbound message
    InboundDropped(TransportCode),
    /// The transport reported an asynchronous send failure
    SendFailed(TransportCode),
    /// A physical button event
    Button(ButtonPress),
}

/// Button events the host click layer forwards to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    /// Short press of the select button: play/pause toggle
    Select,
    /// Long press of the select button: button-mode toggle
    SelectHold,
    /// Up button: volume up or next track, per button mode
    Up,
    /// Down button: volume down or previous track, per button mode
    Down,
}

/// The device-control synchronization core.
pub struct Controller<T: Transport, R: Renderer> {
    config: RemoteConfig,
    status: DeviceStatus,
    dispatcher: CommandDispatcher<T>,
    renderer: R,
    buttons: ButtonModeController,
    overlay: VolumeDisplayController,
    refresh: RefreshScheduler,
    poller: StatusPoller,
    app_ready: Deadline,
}

impl<T: Transport, R: Renderer> Controller<T, R> {
    pub fn new(config: RemoteConfig, transport: T, renderer: R) -> Self {
        Self {
            status: DeviceStatus::new(),
            dispatcher: CommandDispatcher::new(transport),
            renderer,
            buttons: ButtonModeController::new(config.mode_revert_timeout),
            overlay: VolumeDisplayController::new(config.overlay_revert_timeout),
            refresh: RefreshScheduler::new(config.refresh_debounce),
            poller: StatusPoller::new(config.status_poll_interval),
            app_ready: Deadline::idle(),
            config,
        }
    }

    /// Run the event loop until the event channel closes.
    ///
    /// Startup announces the device to the companion after a short delay
    /// and begins status polling with an immediate request. On shutdown
    /// the poller stops and every pending deadline is dropped with the
    /// controller.
    pub async fn run(mut self, mut events: mpsc::Receiver<Event>) {
        self.app_ready.arm(self.config.app_ready_delay);
        let request = self.poller.start();
        self.send(request);

        loop {
            tokio::select! {
                received = events.recv() => match received {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                _ = wait(self.refresh.deadline()) => self.on_refresh_due(),
                _ = wait(self.buttons.deadline()) => self.on_mode_revert_due(),
                _ = wait(self.overlay.deadline()) => self.on_overlay_revert_due(),
                _ = wait(self.poller.deadline()) => self.on_poll_due(),
                _ = wait(self.app_ready.get()) => self.on_app_ready_due(),
            }
        }

        self.poller.stop();
        tracing::info!("controller event loop stopped");
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::StatusBatch(fields) => self.on_status_batch(&fields),
            Event::InboundDropped(code) => {
                ingest::note_inbound_dropped(&mut self.status, code);
                self.refresh.schedule();
            }
            Event::SendFailed(code) => {
                ingest::note_send_failed(&mut self.status, code);
                self.refresh.schedule();
            }
            Event::Button(press) => self.on_button(press),
        }
    }

    fn on_status_batch(&mut self, fields: &[RawField]) {
        let outcome = ingest::apply_batch(&mut self.status, fields);
        if outcome.status_requested {
            self.send(Command::GetStatus);
        }
        if outcome.dirty {
            self.refresh.schedule();
        }
    }

    fn on_button(&mut self, press: ButtonPress) {
        match press {
            ButtonPress::Select => {
                if let Some(toggle) = playback::toggle(self.status.play_state()) {
                    // Optimistic: show the guessed state before confirmation.
                    self.status.set_play_state(toggle.next);
                    self.refresh.schedule();
                    self.send(toggle.command);
                }
            }
            ButtonPress::SelectHold => {
                self.buttons.toggle();
                self.draw_icons();
            }
            ButtonPress::Up => self.on_secondary(true),
            ButtonPress::Down => self.on_secondary(false),
        }
    }

    fn on_secondary(&mut self, up: bool) {
        match self.buttons.mode() {
            ButtonMode::Volume => {
                self.send(if up {
                    Command::VolumeUp
                } else {
                    Command::VolumeDown
                });
                self.overlay.note_volume_action();
                self.draw_overlay();
            }
            ButtonMode::Track => {
                self.send(if up {
                    Command::NextTrack
                } else {
                    Command::PreviousTrack
                });
            }
        }
    }

    fn on_refresh_due(&mut self) {
        self.refresh.clear();
        if !self.renderer.is_ready() {
            tracing::warn!("skipping refresh: render targets not ready");
            return;
        }
        let view = ViewState {
            status: &self.status,
            button_mode: self.buttons.mode(),
            display_mode: self.overlay.mode(),
        };
        // Fixed order: icons, overlay, bar, track text, status text.
        self.renderer.draw_icons(&view);
        self.renderer.draw_volume_overlay(&view);
        self.renderer.draw_volume_bar(&view);
        self.renderer.draw_track_text(&view);
        self.renderer.draw_status_text(&view);
    }

    fn on_mode_revert_due(&mut self) {
        if self.buttons.on_revert_due() {
            self.draw_icons();
        }
    }

    fn on_overlay_revert_due(&mut self) {
        if self.overlay.on_revert_due() {
            self.draw_overlay();
        }
    }

    fn on_poll_due(&mut self) {
        let request = self.poller.on_due();
        self.send(request);
    }

    fn on_app_ready_due(&mut self) {
        self.app_ready.cancel();
        self.send(Command::AppReady);
    }

    fn send(&mut self, command: Command) {
        if let Err(err) = self.dispatcher.send(command) {
            ingest::note_send_failed(&mut self.status, err.code);
            self.refresh.schedule();
        }
    }

    /// Icon-only redraw used by mode changes, bypassing the debounce.
    fn draw_icons(&mut self) {
        if !self.renderer.is_ready() {
            return;
        }
        let view = ViewState {
            status: &self.status,
            button_mode: self.buttons.mode(),
            display_mode: self.overlay.mode(),
        };
        self.renderer.draw_icons(&view);
    }

    /// Overlay and bar redraw used by volume actions and overlay revert.
    fn draw_overlay(&mut self) {
        if !self.renderer.is_ready() {
            return;
        }
        let view = ViewState {
            status: &self.status,
            button_mode: self.buttons.mode(),
            display_mode: self.overlay.mode(),
        };
        self.renderer.draw_volume_overlay(&view);
        self.renderer.draw_volume_bar(&view);
    }
}

/// Sleep until the deadline, or forever when there is none.
async fn wait(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
