//!
//! SDL2 window and event pump.
//!
//! Opens a small window with a software canvas. Nothing is drawn besides a
//! black clear on every `present`; the window exists so the platform
//! delivers keyboard focus and quit requests.
//!
//! Text input is enabled so every key press that types something is
//! followed by a `TextInput` event carrying the layout-aware text. That
//! text is folded into the preceding key press.
//!

use sdl2::{
    event::Event,
    keyboard::Mod,
    pixels::Color,
    render::Canvas,
    video::Window,
    EventPump, Sdl, VideoSubsystem,
};

use super::Display;
use crate::config::WindowOptions;
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key, Modifiers};

/// SDL2 display.
///
/// SDL must be used from the thread that initialized it, so this type is
/// neither `Send` nor `Sync`.
pub struct SdlDisplay {
    /// Canvas owning the window.
    canvas: Canvas<Window>,
    /// Event pump for input handling.
    event_pump: EventPump,
    /// Event read while looking for a key press's text.
    pending: Option<Event>,
    /// Video subsystem, kept alive for the window.
    _video_subsystem: VideoSubsystem,
    /// SDL2 context.
    _sdl_context: Sdl,
}

impl SdlDisplay {
    /// Initialize SDL2 and open the window.
    pub fn open(options: &WindowOptions) -> Result<Self> {
        log::info!("Initializing SDL2");

        let sdl_context =
            sdl2::init().map_err(|e| Error::Display(format!("SDL2 init: {}", e)))?;

        let video_subsystem = sdl_context
            .video()
            .map_err(|e| Error::Display(format!("video subsystem: {}", e)))?;

        log::info!(
            "SDL2 video driver: {}",
            video_subsystem.current_video_driver()
        );

        let resolution = options.resolution;
        log::info!(
            "Creating window: {}x{}",
            resolution.width,
            resolution.height
        );

        let window = video_subsystem
            .window(&options.title, resolution.width, resolution.height)
            .position_centered()
            .build()
            .map_err(|e| Error::Display(format!("window creation: {}", e)))?;

        let event_pump = sdl_context
            .event_pump()
            .map_err(|e| Error::Display(format!("event pump: {}", e)))?;

        video_subsystem.text_input().start();

        let canvas = window
            .into_canvas()
            .software()
            .build()
            .map_err(|e| Error::Display(format!("canvas creation: {}", e)))?;

        Ok(Self {
            canvas,
            event_pump,
            pending: None,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }
}

/// Convert an SDL event to an [`InputEvent`].
fn translate(event: Event) -> InputEvent {
    match event {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown {
            keycode: Some(keycode),
            keymod,
            repeat: false,
            ..
        } => InputEvent::KeyDown(Key::new(keycode.into_i32(), modifiers(keymod))),
        _ => InputEvent::Other,
    }
}

fn modifiers(keymod: Mod) -> Modifiers {
    Modifiers {
        shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        caps_lock: keymod.contains(Mod::CAPSMOD),
        num_lock: keymod.contains(Mod::NUMMOD),
    }
}

/// Fold the text of `next` into `key` when `next` is the key's `TextInput`.
///
/// Returns the event to keep for the following read otherwise.
fn attach_text(key: Key, next: Option<Event>) -> (InputEvent, Option<Event>) {
    match next {
        Some(Event::TextInput { text, .. }) => (InputEvent::KeyDown(key.with_text(text)), None),
        other => (InputEvent::KeyDown(key), other),
    }
}

impl SdlDisplay {
    fn complete(&mut self, event: Event) -> InputEvent {
        match translate(event) {
            InputEvent::KeyDown(key) => {
                let (event, leftover) = attach_text(key, self.event_pump.poll_event());
                self.pending = leftover;
                event
            }
            other => other,
        }
    }
}

impl Display for SdlDisplay {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let event = self
            .pending
            .take()
            .or_else(|| self.event_pump.poll_event())?;
        Some(self.complete(event))
    }

    fn wait_event(&mut self) -> InputEvent {
        let event = match self.pending.take() {
            Some(event) => event,
            None => self.event_pump.wait_event(),
        };
        self.complete(event)
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas.present();
        Ok(())
    }
}

impl Drop for SdlDisplay {
    fn drop(&mut self) {
        log::debug!("SdlDisplay dropping, closing window");
    }
}
