//! Decoded sound clips
//!
//! A clip holds the whole file as interleaved 16-bit PCM so replaying it
//! never touches the disk again. Decoding goes through rodio, which covers
//! WAV, Ogg Vorbis and MP3.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, Source};

use crate::error::{Error, Result};

/// A sound file decoded into memory.
///
/// Cloning is cheap; the sample data is shared.
#[derive(Debug, Clone)]
pub struct SoundClip {
    path: PathBuf,
    channels: u16,
    sample_rate: u32,
    samples: Arc<[i16]>,
}

impl SoundClip {
    /// Read and decode a sound file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, path)
    }

    /// Decode an in-memory sound file. `path` is only used for reporting.
    pub fn from_bytes(bytes: Vec<u8>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let decoder = Decoder::new(Cursor::new(bytes)).map_err(|source| Error::Decode {
            path: path.clone(),
            source,
        })?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Arc<[i16]> = decoder.collect();

        log::debug!(
            "Decoded {}: {} samples, {} Hz, {} channel(s)",
            path.display(),
            samples.len(),
            sample_rate,
            channels
        );

        Ok(Self {
            path,
            channels,
            sample_rate,
            samples,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Interleaved samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Playing time at the clip's own sample rate
    pub fn duration(&self) -> Duration {
        if self.channels == 0 || self.sample_rate == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as f64 / f64::from(self.channels);
        Duration::from_secs_f64(frames / f64::from(self.sample_rate))
    }

    /// A fresh rodio source positioned at the start of the clip.
    ///
    /// The source shares the clip's samples.
    pub fn to_source(&self) -> ClipSource {
        ClipSource {
            samples: Arc::clone(&self.samples),
            position: 0,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }
}

/// Playback cursor over a clip's shared samples
#[derive(Debug, Clone)]
pub struct ClipSource {
    samples: Arc<[i16]>,
    position: usize,
    channels: u16,
    sample_rate: u32,
}

impl Iterator for ClipSource {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        let sample = self.samples.get(self.position).copied()?;
        self.position += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.samples.len() - self.position;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ClipSource {}

impl Source for ClipSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.samples.len() - self.position)
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        if self.channels == 0 || self.sample_rate == 0 {
            return Some(Duration::ZERO);
        }
        let frames = self.samples.len() as f64 / f64::from(self.channels);
        Some(Duration::from_secs_f64(frames / f64::from(self.sample_rate)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a 16-bit PCM WAV file in memory
    pub(crate) fn wav_bytes(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let block_align = channels * 2;
        let byte_rate = sample_rate * u32::from(block_align);

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&channels.to_le_bytes());
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&block_align.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_decode_wav() {
        let samples: Vec<i16> = (0..800).map(|i| (i * 10) as i16).collect();
        let clip = SoundClip::from_bytes(wav_bytes(1, 8000, &samples), "tone.wav").unwrap();
        assert_eq!(clip.channels(), 1);
        assert_eq!(clip.sample_rate(), 8000);
        assert_eq!(clip.samples(), samples.as_slice());
        assert_eq!(clip.duration(), Duration::from_millis(100));
        assert_eq!(clip.path(), Path::new("tone.wav"));
    }

    #[test]
    fn test_stereo_duration() {
        let clip = SoundClip::from_bytes(wav_bytes(2, 1000, &[0; 1000]), "stereo.wav").unwrap();
        assert_eq!(clip.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = SoundClip::from_bytes(b"definitely not audio".to_vec(), "junk.wav").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SoundClip::open("/nonexistent/dir/kick.wav").unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/dir/kick.wav")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_shares_samples() {
        let clip = SoundClip::from_bytes(wav_bytes(1, 8000, &[1, 2, 3]), "a.wav").unwrap();
        let copy = clip.clone();
        assert!(std::ptr::eq(clip.samples(), copy.samples()));
    }

    #[test]
    fn test_to_source_format() {
        let clip = SoundClip::from_bytes(wav_bytes(2, 22050, &[0; 8]), "s.wav").unwrap();
        let source = clip.to_source();
        assert_eq!(source.channels(), 2);
        assert_eq!(source.sample_rate(), 22050);
        assert_eq!(source.count(), 8);
    }

    #[test]
    fn test_source_shares_samples() {
        let clip = SoundClip::from_bytes(wav_bytes(1, 1000, &[5, 6, 7]), "s.wav").unwrap();
        let first = clip.to_source();
        let second = clip.to_source();
        assert_eq!(Arc::strong_count(&clip.samples), 3);
        assert_eq!(first.total_duration(), Some(clip.duration()));

        // Each source keeps its own position
        assert_eq!(first.collect::<Vec<_>>(), vec![5, 6, 7]);
        let mut second = second;
        assert_eq!(second.next(), Some(5));
        assert_eq!(second.current_frame_len(), Some(2));
    }
}
