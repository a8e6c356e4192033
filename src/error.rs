//! Error types shared by the session, mixer and player.
//!
//! Missing speech support has no variant here; `SpeechController::speak`
//! reports it by returning `false`.

use std::io;
use std::path::PathBuf;

/// Errors returned by session, mixer and player operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("audio session is already initialized")]
    AlreadyInitialized,

    #[error("audio session is not initialized")]
    NotInitialized,

    #[error("no free playback channel is available")]
    NoChannelAvailable,

    #[error("no audio is currently playing")]
    NotPlaying,

    #[error("volume percentage must be between 0 and 100, got {0}")]
    InvalidVolume(f32),

    #[error("failed to read sound file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode sound file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("display error: {0}")]
    Display(String),

    #[error("audio output error: {0}")]
    Output(String),
}

/// Result type for library operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
