//! Rodio-based audio output
//!
//! One rodio `Sink` per channel, all feeding the default output stream.
//! Rodio mixes on its own thread; everything here runs on the caller's.

use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::{Error, Result};

use super::channel::{Channel, OutputDevice};
use super::clip::SoundClip;

/// The default audio output device.
///
/// The stream stops when this is dropped, so it must outlive its channels.
pub struct RodioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioOutput {
    /// Open the system's default output device
    pub fn open_default() -> Result<Self> {
        log::info!("Opening default audio output");
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| Error::Output(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl OutputDevice for RodioOutput {
    fn open_channel(&mut self) -> Result<Box<dyn Channel>> {
        Ok(Box::new(SinkChannel::new(self.handle.clone())))
    }
}

/// A channel backed by a rodio sink.
///
/// Every `play` builds a new sink, which also resets the position.
pub struct SinkChannel {
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl SinkChannel {
    pub fn new(handle: OutputStreamHandle) -> Self {
        Self { handle, sink: None }
    }
}

impl Channel for SinkChannel {
    fn play(&mut self, clip: &SoundClip, volume: f32) -> Result<()> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let sink = Sink::try_new(&self.handle).map_err(|e| Error::Output(e.to_string()))?;
        sink.set_volume(volume);
        sink.append(clip.to_source());
        self.sink = Some(sink);

        log::debug!(
            "Playing {} at volume {:.2}",
            clip.path().display(),
            volume
        );
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(ref sink) = self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(ref sink) = self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_busy(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(ref sink) = self.sink {
            sink.set_volume(volume);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires an audio output device
    fn test_sink_channel_lifecycle() {
        let mut output = RodioOutput::open_default().unwrap();
        let mut channel = output.open_channel().unwrap();
        assert!(!channel.is_busy());

        let bytes = crate::sound::clip::tests::wav_bytes(1, 8000, &[0; 8000]);
        let clip = SoundClip::from_bytes(bytes, "silence.wav").unwrap();
        channel.play(&clip, 0.5).unwrap();
        assert!(channel.is_busy());

        channel.pause();
        assert!(channel.is_busy());
        channel.resume();
        channel.stop();
        assert!(!channel.is_busy());
    }
}
