use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::error::Error;

/// Number of playback channels opened when nothing else is requested.
pub const DEFAULT_CHANNELS: usize = 16;

/// Frame cap for the cooperative pause loop.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Speech synthesizer looked up on `PATH`.
pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

/// Words per minute handed to the synthesizer.
pub const DEFAULT_SPEECH_RATE: u32 = 200;

/// Library options that can be set in code or from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub channels: usize,
    pub frame_rate: u32,
    pub window: WindowOptions,
    pub speech: SpeechOptions,
    /// Explicit base directory for resource files, checked before the
    /// bundle directory and the working directory.
    pub resource_dir: Option<PathBuf>,
}

/// Window opened on `load`. Event polling needs one even when nothing is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    pub program: String,
    pub rate: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS,
            frame_rate: DEFAULT_FRAME_RATE,
            window: WindowOptions::default(),
            speech: SpeechOptions::default(),
            resource_dir: None,
        }
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: String::from("Accessible Game"),
            resolution: Resolution {
                width: 400,
                height: 200,
            },
        }
    }
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_SPEECH_PROGRAM.to_string(),
            rate: DEFAULT_SPEECH_RATE,
        }
    }
}

/// Parse a resolution string in the format "WIDTHxHEIGHT"
pub fn parse_resolution(s: &str) -> Result<Resolution> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        anyhow::bail!("Resolution must be in WIDTHxHEIGHT format");
    }

    let width: u32 = parts[0].parse().context("Invalid width value")?;
    let height: u32 = parts[1].parse().context("Invalid height value")?;

    if width == 0 || height == 0 {
        anyhow::bail!("Resolution values must be positive");
    }

    Ok(Resolution { width, height })
}

/// Convert a volume percentage (0-100) to a linear gain (0.0-1.0).
///
/// Values outside the range, and NaN, are rejected rather than clamped.
pub fn volume_gain(percentage: f32) -> Result<f32, Error> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(Error::InvalidVolume(percentage));
    }
    Ok(percentage / 100.0)
}

/// Parse a volume percentage given as text
pub fn parse_volume(s: &str) -> Result<f32> {
    let percentage: f32 = s.trim().parse().context("Invalid volume value")?;
    volume_gain(percentage)?;
    Ok(percentage)
}

/// Parse a speech rate in words per minute
pub fn parse_speech_rate(s: &str) -> Result<u32> {
    let rate: u32 = s.trim().parse().context("Invalid speech rate")?;

    // espeak-ng accepts 80 to 450 words per minute
    const MIN_RATE: u32 = 80;
    const MAX_RATE: u32 = 450;

    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        anyhow::bail!("Speech rate out of range ({} to {})", MIN_RATE, MAX_RATE);
    }

    Ok(rate)
}
