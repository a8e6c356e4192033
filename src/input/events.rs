//! Backend-neutral window events
//!
//! Display backends translate their native events into these so the pause
//! and input loops never see SDL types.

use super::keynames::{key_label, key_name};

/// Modifier state captured with a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
}

/// A pressed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// SDL keycode
    pub code: i32,
    pub modifiers: Modifiers,
    /// Text the platform produced for this press, using the active layout
    pub text: Option<String>,
}

impl Key {
    pub fn new(code: i32, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            text: None,
        }
    }

    /// Key without modifiers held
    pub fn plain(code: i32) -> Self {
        Self::new(code, Modifiers::default())
    }

    /// Attach the text the platform reported for this press
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Printable text if the key types any, otherwise its name.
    ///
    /// Platform text wins. Whitespace and control text (space, return) is
    /// reported by name.
    pub fn label(&self) -> String {
        match self.text.as_deref() {
            Some(text) if is_printable(text) => text.to_string(),
            _ => key_label(self.code, self.modifiers),
        }
    }

    pub fn name(&self) -> &'static str {
        key_name(self.code)
    }
}

fn is_printable(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| !c.is_control() && !c.is_whitespace())
}

/// Event drained from the window's queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or quit requested
    Quit,
    /// Initial key press (auto-repeat excluded)
    KeyDown(Key),
    /// Anything the loops do not act on
    Other,
}

/// How `Session::pause` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    Elapsed,
    QuitRequested,
}

/// Result of waiting for a key with `Session::input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Key(String),
    QuitRequested,
}

impl InputOutcome {
    /// The key text, unless a quit was requested
    pub fn key(&self) -> Option<&str> {
        match self {
            InputOutcome::Key(text) => Some(text),
            InputOutcome::QuitRequested => None,
        }
    }
}
