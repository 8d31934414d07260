//! Drives the controller against stub transport and renderer
//! implementations, scripting a short session to show the event flow.
//!
//! Run with `cargo run --example simulated_session` and set
//! `REMOTE_LOG_MODE=debug` to watch the field ingestion logs.

use std::time::Duration;

use tokio::sync::mpsc;

use remote_core::logging::init_logging_from_env;
use remote_core::{
    ButtonPress, Controller, Event, FieldId, PlayState, RawField, RemoteConfig, Renderer,
    Transport, TransportError, ViewState,
};

struct StdoutTransport;

impl Transport for StdoutTransport {
    fn send(&mut self, frame: &[RawField]) -> Result<(), TransportError> {
        for field in frame {
            println!("-> outbound field {}", field.id);
        }
        Ok(())
    }
}

struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn draw_icons(&mut self, view: &ViewState<'_>) {
        println!(
            "[icons] state={:?} buttons={:?}",
            view.status.play_state(),
            view.button_mode
        );
    }

    fn draw_volume_overlay(&mut self, view: &ViewState<'_>) {
        println!("[overlay] display={:?}", view.display_mode);
    }

    fn draw_volume_bar(&mut self, view: &ViewState<'_>) {
        println!("[bar] volume={:?}", view.status.volume());
    }

    fn draw_track_text(&mut self, view: &ViewState<'_>) {
        println!(
            "[track] {} / {} / {}",
            view.status.track_title(),
            view.status.artist_name(),
            view.status.album_name()
        );
    }

    fn draw_status_text(&mut self, view: &ViewState<'_>) {
        println!("[status] {:?}", view.status.display_line());
    }
}

#[tokio::main]
async fn main() {
    init_logging_from_env().expect("logging init");

    let (events, rx) = mpsc::channel(16);
    let controller = Controller::new(RemoteConfig::default(), StdoutTransport, StdoutRenderer);
    let task = tokio::spawn(controller.run(rx));

    // Companion comes up and reports what is playing.
    events
        .send(Event::StatusBatch(vec![
            RawField::int(FieldId::PlayState, PlayState::Playing.wire_value()),
            RawField::int(FieldId::Volume, 35),
            RawField::text(FieldId::TrackTitle, "Take Five"),
            RawField::text(FieldId::ArtistName, "Dave Brubeck"),
            RawField::text(FieldId::AlbumName, "Time Out"),
        ]))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Pause from the watch, then nudge the volume.
    events.send(Event::Button(ButtonPress::Select)).await.unwrap();
    events.send(Event::Button(ButtonPress::Down)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    drop(events);
    task.await.expect("controller task");
}
