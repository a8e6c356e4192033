//! Window and event queue.
//!
//! The mixer does not need a window, but the event queue does: keyboard
//! events are only delivered to a focused window, so `Session::load` always
//! opens one. `Display` is the seam the session drives; `SdlDisplay` is the
//! native implementation.

pub mod sdl;

pub use sdl::SdlDisplay;

use crate::error::Result;
use crate::input::InputEvent;

/// A window with an event queue.
pub trait Display {
    /// Take the next pending event without blocking.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Block until an event arrives.
    fn wait_event(&mut self) -> InputEvent;

    /// Redraw the window.
    fn present(&mut self) -> Result<()>;
}
