//! Session lifecycle, pause and input loops
//!
//! A [`Session`] owns the window, the channel pool and the speech
//! controller. It starts unloaded; `load` opens everything and `exit`
//! closes it again, any number of times. Dropping a loaded session exits.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::backend::{Backend, NativeBackend};
use crate::config::Options;
use crate::display::Display;
use crate::error::{Error, Result};
use crate::input::{InputEvent, InputOutcome, PauseOutcome};
use crate::resource::ResourcePaths;
use crate::sound::mixer::Mixer;
use crate::speech::SpeechController;
use crate::time::FrameClock;

pub struct Session {
    options: Options,
    backend: Box<dyn Backend>,
    display: Option<Box<dyn Display>>,
    mixer: Mixer,
    speech: SpeechController,
    clock: FrameClock,
    resources: ResourcePaths,
}

impl Session {
    /// Unloaded session using SDL2 and the default audio device
    pub fn new(options: Options) -> Self {
        Self::with_backend(options, NativeBackend)
    }

    /// Unloaded session on a custom backend
    pub fn with_backend(options: Options, backend: impl Backend + 'static) -> Self {
        let speech = SpeechController::new(options.speech.clone());
        let clock = FrameClock::new(options.frame_rate);
        let resources = ResourcePaths::new(options.resource_dir.as_deref());
        Self {
            options,
            backend: Box::new(backend),
            display: None,
            mixer: Mixer::new(),
            speech,
            clock,
            resources,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Open the window and audio output with `channels` playback channels.
    ///
    /// Errors:
    /// - `AlreadyInitialized`: loaded twice without `exit`
    /// - `Display` / `Output`: the backend failed; the session stays unloaded
    pub fn load(&mut self, channels: usize) -> Result<()> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized);
        }

        log::info!("Loading session with {} channels", channels);
        let display = self.backend.open_display(&self.options.window)?;
        let output = self.backend.open_output()?;
        self.mixer.open(output, channels)?;

        self.display = Some(display);
        self.clock.reset();
        Ok(())
    }

    /// `load` with the configured channel count
    pub fn load_default(&mut self) -> Result<()> {
        self.load(self.options.channels)
    }

    /// Stop all channels and close the audio output and the window.
    ///
    /// Errors:
    /// - `NotInitialized`: the session is not loaded
    pub fn exit(&mut self) -> Result<()> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }

        log::info!("Exiting session");
        self.mixer.close()?;
        self.display = None;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.display.is_some() && self.mixer.is_open()
    }

    /// Channels opened by the last `load`, 0 while unloaded
    pub fn channel_count(&self) -> usize {
        self.mixer.channel_count()
    }

    /// Channels not reserved by a live player
    pub fn free_channels(&self) -> usize {
        self.mixer.free_channels()
    }

    /// Speak `text`, interrupting the previous utterance.
    ///
    /// Works whether or not the session is loaded. Returns false if the
    /// synthesizer is unavailable.
    pub fn speak(&mut self, text: &str) -> bool {
        self.speech.speak(text)
    }

    pub fn speech(&mut self) -> &mut SpeechController {
        &mut self.speech
    }

    /// Wait for `duration` while keeping the window responsive.
    ///
    /// Errors:
    /// - `NotInitialized`: the session is not loaded
    pub fn pause(&mut self, duration: Duration) -> Result<PauseOutcome> {
        self.pause_with(duration, || {})
    }

    /// Like [`pause`](Self::pause), calling `each_frame` once per frame.
    pub fn pause_with(
        &mut self,
        duration: Duration,
        mut each_frame: impl FnMut(),
    ) -> Result<PauseOutcome> {
        let display = self.display.as_mut().ok_or(Error::NotInitialized)?;
        if duration.is_zero() {
            return Ok(PauseOutcome::Elapsed);
        }

        let deadline = Instant::now() + duration;
        self.clock.reset();
        self.clock.tick();
        loop {
            while let Some(event) = display.poll_event() {
                if event == InputEvent::Quit {
                    log::debug!("Quit requested during pause");
                    return Ok(PauseOutcome::QuitRequested);
                }
            }

            each_frame();
            display.present()?;

            if Instant::now() >= deadline {
                return Ok(PauseOutcome::Elapsed);
            }
            self.clock.tick();
        }
    }

    /// Block until a key is pressed.
    ///
    /// Returns the typed character, or the key name for keys that do not
    /// type one.
    ///
    /// Errors:
    /// - `NotInitialized`: the session is not loaded
    pub fn input(&mut self) -> Result<InputOutcome> {
        let display = self.display.as_mut().ok_or(Error::NotInitialized)?;
        loop {
            match display.wait_event() {
                InputEvent::KeyDown(key) => return Ok(InputOutcome::Key(key.label())),
                InputEvent::Quit => return Ok(InputOutcome::QuitRequested),
                InputEvent::Other => {}
            }
        }
    }

    /// Resolve a resource path against the configured base directory
    pub fn resource_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.resources.resolve(relative)
    }

    pub fn resources(&self) -> &ResourcePaths {
        &self.resources
    }

    pub(crate) fn mixer(&self) -> &Mixer {
        &self.mixer
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("initialized", &self.is_initialized())
            .field("channels", &self.channel_count())
            .field("resources", &self.resources.base())
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.is_initialized() {
            if let Err(err) = self.exit() {
                log::warn!("Session exit on drop failed: {}", err);
            }
        }
    }
}
