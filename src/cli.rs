use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{parse_resolution, parse_speech_rate, parse_volume, Options};

/// Sound board for trying out the accessible games toolkit
#[derive(Parser, Debug, Default)]
#[command(name = "accessible-games")]
#[command(version)]
#[command(
    about = "Play sound files on separate channels and speak prompts",
    long_about = "Loads one player per sound file. Press a digit to toggle that \
                  player, 's' to stop everything, 'v'/'V' to change the volume, \
                  and Return or Escape to quit."
)]
pub struct Cli {
    /// Sound files to load, one player each
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Number of playback channels
    #[arg(short, long, value_name = "COUNT")]
    pub channels: Option<usize>,

    /// Window size (e.g., 400x200)
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub res: Option<String>,

    /// Frame rate cap for the pause loop (0 for uncapped)
    #[arg(long = "fps", value_name = "RATE")]
    pub frame_rate: Option<u32>,

    /// Speech synthesizer executable
    #[arg(long = "speech-program", value_name = "PROGRAM")]
    pub speech_program: Option<String>,

    /// Speech rate in words per minute (80-450)
    #[arg(long, value_name = "WPM")]
    pub rate: Option<String>,

    /// Directory that relative sound paths are resolved against
    #[arg(long = "resource-dir", value_name = "DIR")]
    pub resource_dir: Option<PathBuf>,

    /// Initial volume for every player (0-100)
    #[arg(long, value_name = "VOLUME")]
    pub volume: Option<String>,

    /// Text spoken after loading
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: Options) -> Result<Options> {
        if let Some(channels) = self.channels {
            opts.channels = channels;
        }

        if let Some(ref res) = self.res {
            opts.window.resolution = parse_resolution(res).context("Invalid resolution format")?;
        }

        if let Some(frame_rate) = self.frame_rate {
            opts.frame_rate = frame_rate;
        }

        if let Some(ref program) = self.speech_program {
            if program.trim().is_empty() {
                anyhow::bail!("Speech program must not be empty");
            }
            opts.speech.program = program.clone();
        }

        if let Some(ref rate) = self.rate {
            opts.speech.rate = parse_speech_rate(rate)?;
        }

        if let Some(ref dir) = self.resource_dir {
            opts.resource_dir = Some(dir.clone());
        }

        Ok(opts)
    }

    /// Initial player volume, if given
    pub fn initial_volume(&self) -> Result<Option<f32>> {
        self.volume.as_deref().map(parse_volume).transpose()
    }
}
