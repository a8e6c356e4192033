//! Multimedia backend selection
//!
//! `Session::load` asks its backend for a window and an audio output.
//! `NativeBackend` opens SDL2 and rodio; tests plug in scripted fakes.

use crate::config::WindowOptions;
use crate::display::{Display, SdlDisplay};
use crate::error::Result;
use crate::sound::{OutputDevice, RodioOutput};

/// Opens the window and the audio output for a session
pub trait Backend {
    fn open_display(&mut self, options: &WindowOptions) -> Result<Box<dyn Display>>;

    fn open_output(&mut self) -> Result<Box<dyn OutputDevice>>;
}

/// SDL2 window with the default rodio output device
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBackend;

impl Backend for NativeBackend {
    fn open_display(&mut self, options: &WindowOptions) -> Result<Box<dyn Display>> {
        Ok(Box::new(SdlDisplay::open(options)?))
    }

    fn open_output(&mut self) -> Result<Box<dyn OutputDevice>> {
        Ok(Box::new(RodioOutput::open_default()?))
    }
}
