//! Sound player
//!
//! A [`Player`] binds one decoded clip to one reserved channel for as long
//! as it lives. Dropping the player stops the channel and hands it back,
//! so a player scoped to a block cleans up on every exit path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::volume_gain;
use crate::error::{Error, Result};
use crate::session::Session;

use super::clip::SoundClip;
use super::mixer::{ChannelLease, Mixer};

/// Plays one sound file on its own channel.
///
/// ```no_run
/// use accessible_games::{Player, Session};
///
/// # fn main() -> accessible_games::Result<()> {
/// let mut session = Session::default();
/// session.load(16)?;
/// {
///     let mut kick = Player::new(&session, "kick.wav")?;
///     kick.play()?;
///     session.pause(std::time::Duration::from_secs(1))?;
/// } // kick stops here
/// session.exit()?;
/// # Ok(())
/// # }
/// ```
pub struct Player {
    clip: SoundClip,
    mixer: Mixer,
    lease: ChannelLease,
    paused: bool,
    volume: f32,
}

impl Player {
    /// Load `path` and reserve a channel for it.
    ///
    /// Errors:
    /// - `NotInitialized`: the session is not loaded
    /// - `Io` / `Decode`: the file is missing or not a supported sound
    /// - `NoChannelAvailable`: every channel is taken
    pub fn new(session: &Session, path: impl AsRef<Path>) -> Result<Self> {
        if !session.is_initialized() {
            return Err(Error::NotInitialized);
        }
        let clip = SoundClip::open(path)?;
        Self::from_clip(session, clip)
    }

    /// Reserve a channel for an already decoded clip
    pub fn from_clip(session: &Session, clip: SoundClip) -> Result<Self> {
        let mixer = session.mixer().clone();
        let lease = mixer.reserve()?;
        log::debug!(
            "Player for {} on channel {}",
            clip.path().display(),
            lease.index()
        );
        Ok(Self {
            clip,
            mixer,
            lease,
            paused: false,
            volume: 1.0,
        })
    }

    /// Start playback, or resume it if paused.
    ///
    /// Errors:
    /// - `NotInitialized`: the session was exited since this player was made
    pub fn play(&mut self) -> Result<()> {
        let clip = &self.clip;
        let volume = self.volume;
        let paused = self.paused;
        self.mixer.with_channel(self.lease, |channel| {
            if paused {
                channel.resume();
                Ok(())
            } else {
                channel.play(clip, volume)
            }
        })??;
        self.paused = false;
        Ok(())
    }

    /// Pause in place.
    ///
    /// Errors:
    /// - `NotPlaying`: the channel is idle
    pub fn pause(&mut self) -> Result<()> {
        self.mixer.with_channel(self.lease, |channel| {
            if !channel.is_busy() {
                return Err(Error::NotPlaying);
            }
            channel.pause();
            Ok(())
        })??;
        self.paused = true;
        Ok(())
    }

    /// Stop and rewind.
    ///
    /// Errors:
    /// - `NotPlaying`: the channel is idle
    pub fn stop(&mut self) -> Result<()> {
        self.mixer.with_channel(self.lease, |channel| {
            if !channel.is_busy() {
                return Err(Error::NotPlaying);
            }
            channel.stop();
            Ok(())
        })??;
        self.paused = false;
        Ok(())
    }

    /// Set the volume as a percentage of the recorded level.
    ///
    /// Errors:
    /// - `InvalidVolume`: `percentage` is outside 0..=100
    pub fn set_volume(&mut self, percentage: f32) -> Result<()> {
        let gain = volume_gain(percentage)?;
        self.volume = gain;
        // Stored either way; applied now only while the mixer is open
        let _ = self
            .mixer
            .with_channel(self.lease, |channel| channel.set_volume(gain));
        Ok(())
    }

    /// Current volume as a percentage
    pub fn volume(&self) -> f32 {
        self.volume * 100.0
    }

    /// True while the channel holds an unfinished clip, paused or not
    pub fn is_busy(&self) -> bool {
        self.mixer
            .with_channel(self.lease, |channel| channel.is_busy())
            .unwrap_or(false)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn path(&self) -> &Path {
        self.clip.path()
    }

    pub fn clip(&self) -> &SoundClip {
        &self.clip
    }

    pub fn duration(&self) -> Duration {
        self.clip.duration()
    }

    /// Index of the reserved channel
    pub fn channel_index(&self) -> usize {
        self.lease.index()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("path", &PathBuf::from(self.clip.path()))
            .field("channel", &self.lease.index())
            .field("paused", &self.paused)
            .field("volume", &self.volume)
            .finish()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        let _ = self.mixer.with_channel(self.lease, |channel| {
            if channel.is_busy() {
                channel.stop();
            }
        });
        self.mixer.release(self.lease);
    }
}
