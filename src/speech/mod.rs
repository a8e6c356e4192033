//! Interruptible speech
//!
//! Each utterance runs in its own synthesizer process. Starting a new one
//! first interrupts the previous one, so a screen reader style prompt is
//! never queued behind stale text. Nothing here blocks on the synthesizer:
//! interrupted children are kept in a retired list and reaped with
//! `try_wait` on later calls.

mod process;

use std::io;
use std::path::PathBuf;
use std::process::Child;

use crate::config::SpeechOptions;

/// What happened to the previous utterance when it was interrupted
#[derive(Debug)]
pub enum Interruption {
    /// Nothing had been spoken yet
    Idle,
    /// The synthesizer was still running and has been signalled
    Terminated,
    /// The synthesizer had already exited on its own
    AlreadyFinished,
    /// The signal could not be delivered
    Failed(io::Error),
}

impl Interruption {
    /// True unless the previous utterance may still be audible
    pub fn is_clean(&self) -> bool {
        !matches!(self, Interruption::Failed(_))
    }
}

/// Runs the external speech synthesizer
#[derive(Debug)]
pub struct SpeechController {
    options: SpeechOptions,
    active: Option<Child>,
    retired: Vec<Child>,
}

impl SpeechController {
    pub fn new(options: SpeechOptions) -> Self {
        Self {
            options,
            active: None,
            retired: Vec::new(),
        }
    }

    pub fn options(&self) -> &SpeechOptions {
        &self.options
    }

    /// Full path of the synthesizer, if it is installed
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.options.program).ok()
    }

    /// Speak `text`, cutting off whatever is being said.
    ///
    /// Returns false when the synthesizer is not installed or could not be
    /// started. Games keep running without speech, so this is not an error.
    pub fn speak(&mut self, text: &str) -> bool {
        let Some(program) = self.locate() else {
            log::debug!("Speech synthesizer '{}' not found", self.options.program);
            return false;
        };

        let interruption = self.interrupt();
        if let Interruption::Failed(ref err) = interruption {
            log::warn!("Previous utterance could not be stopped: {}", err);
        }

        match process::spawn(&program, self.options.rate, text) {
            Ok(child) => {
                log::debug!("Speaking with pid {}: {:?}", child.id(), text);
                self.active = Some(child);
                true
            }
            Err(err) => {
                log::warn!(
                    "Speech synthesizer '{}' could not be started: {}",
                    self.options.program,
                    err
                );
                false
            }
        }
    }

    /// Stop the current utterance, if any.
    pub fn interrupt(&mut self) -> Interruption {
        self.reap_retired();

        let Some(mut child) = self.active.take() else {
            return Interruption::Idle;
        };

        let status = process::has_exited(&mut child);
        self.stop(child, status)
    }

    /// Stop `child` given the result of polling its exit status.
    ///
    /// Anything that may still be running ends up in the retired list.
    fn stop(&mut self, mut child: Child, status: io::Result<bool>) -> Interruption {
        match status {
            Ok(true) => return Interruption::AlreadyFinished,
            Ok(false) => {}
            Err(err) => {
                // Status unknown: signal anyway and keep tracking it
                if let Err(kill_err) = process::terminate(&mut child) {
                    log::debug!("Signal to speech pid {} failed: {}", child.id(), kill_err);
                }
                self.retired.push(child);
                return Interruption::Failed(err);
            }
        }

        match process::terminate(&mut child) {
            Ok(()) => {
                log::trace!("Sent SIGTERM to speech pid {}", child.id());
                self.retired.push(child);
                Interruption::Terminated
            }
            Err(err) => {
                // Already gone between the check and the signal
                if matches!(process::has_exited(&mut child), Ok(true)) {
                    Interruption::AlreadyFinished
                } else {
                    self.retired.push(child);
                    Interruption::Failed(err)
                }
            }
        }
    }

    /// True while the latest utterance is still running
    pub fn is_speaking(&mut self) -> bool {
        match self.active.as_mut() {
            Some(child) => !process::has_exited(child).unwrap_or(true),
            None => false,
        }
    }

    /// Process id of the latest utterance, while one is tracked
    pub fn active_pid(&self) -> Option<u32> {
        self.active.as_ref().map(Child::id)
    }

    /// Collect interrupted children that have exited.
    ///
    /// Returns how many are still pending.
    pub fn reap_retired(&mut self) -> usize {
        self.retired
            .retain_mut(|child| !process::has_exited(child).unwrap_or(true));
        self.retired.len()
    }
}

impl Default for SpeechController {
    fn default() -> Self {
        Self::new(SpeechOptions::default())
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        if let Interruption::Failed(err) = self.interrupt() {
            log::debug!("Speech left running on drop: {}", err);
        }
    }
}
