//! Child process helpers for the speech synthesizer

use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Spawn the synthesizer for one utterance.
///
/// `--` ends option parsing so text starting with a dash is spoken, not
/// parsed. Output is discarded; the synthesizer plays straight to the
/// sound device.
pub(crate) fn spawn(program: &Path, rate: u32, text: &str) -> io::Result<Child> {
    Command::new(program)
        .arg("-s")
        .arg(rate.to_string())
        .arg("--")
        .arg(text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

/// Ask a child to stop.
///
/// SIGTERM on Unix so the synthesizer can release the sound device;
/// a hard kill elsewhere.
#[cfg(unix)]
pub(crate) fn terminate(child: &mut Child) -> io::Result<()> {
    let pid = i32::try_from(child.id()).map_err(io::Error::other)?;
    signal::kill(Pid::from_raw(pid), Signal::SIGTERM).map_err(io::Error::from)
}

#[cfg(not(unix))]
pub(crate) fn terminate(child: &mut Child) -> io::Result<()> {
    child.kill()
}

/// Non-blocking check whether a child has exited
pub(crate) fn has_exited(child: &mut Child) -> io::Result<bool> {
    Ok(child.try_wait()?.is_some())
}
