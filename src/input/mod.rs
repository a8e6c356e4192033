//! Keyboard input
//!
//! Key events as the pause and input loops see them, plus the tables that
//! turn an SDL keycode into the text handed back to the game: the typed
//! character when there is one (`"a"`, `"A"`, `"?"`), otherwise a lowercase
//! key name (`"space"`, `"return"`, `"left shift"`).

pub mod events;
pub mod keynames;

pub use events::{InputEvent, InputOutcome, Key, Modifiers, PauseOutcome};
pub use keynames::{key_from_name, key_label, key_name, key_text};
