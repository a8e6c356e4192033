//! Multi-channel sound playback, keyboard input and interruptible speech
//! for audio-first games.
//!
//! ```no_run
//! use std::time::Duration;
//! use accessible_games::{InputOutcome, Player, Session};
//!
//! # fn main() -> accessible_games::Result<()> {
//! let mut session = Session::default();
//! session.load(16)?;
//! session.speak("Press any key");
//! if let InputOutcome::Key(key) = session.input()? {
//!     let mut beep = Player::new(&session, session.resource_path("beep.wav"))?;
//!     beep.play()?;
//!     session.pause(Duration::from_millis(500))?;
//!     session.speak(&key);
//! }
//! session.exit()?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod resource;
pub mod session;
pub mod sound;
pub mod speech;
pub mod time;

pub use backend::{Backend, NativeBackend};
pub use cli::Cli;
pub use config::{Options, DEFAULT_CHANNELS};
pub use display::Display;
pub use error::{Error, Result};
pub use input::{InputEvent, InputOutcome, Key, Modifiers, PauseOutcome};
pub use logging::LogLevel;
pub use resource::ResourcePaths;
pub use session::Session;
pub use sound::{Channel, OutputDevice, Player, SoundClip};
pub use speech::{Interruption, SpeechController};
