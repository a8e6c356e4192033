//! Scripted backend shared by the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use accessible_games::config::WindowOptions;
use accessible_games::{
    Backend, Channel, Display, Error, InputEvent, Key, Options, OutputDevice, Result, Session,
    SoundClip,
};

/// Everything the fakes record, shared with the test body
#[derive(Debug, Default)]
pub struct Shared {
    pub events: VecDeque<InputEvent>,
    pub presents: usize,
    pub displays_opened: usize,
    pub outputs_opened: usize,
    pub fail_output: bool,
    pub channels: Vec<Rc<RefCell<ChannelState>>>,
}

#[derive(Debug, Default)]
pub struct ChannelState {
    pub busy: bool,
    pub paused: bool,
    pub plays: usize,
    pub volume: f32,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    pub shared: Rc<RefCell<Shared>>,
}

impl FakeBackend {
    pub fn push_event(&self, event: InputEvent) {
        self.shared.borrow_mut().events.push_back(event);
    }

    pub fn push_key(&self, code: i32) {
        self.push_event(InputEvent::KeyDown(Key::plain(code)));
    }

    pub fn presents(&self) -> usize {
        self.shared.borrow().presents
    }

    /// State of the `index`th channel opened since the backend was created
    pub fn channel(&self, index: usize) -> Rc<RefCell<ChannelState>> {
        self.shared.borrow().channels[index].clone()
    }

    /// Channels opened by the most recent load
    pub fn latest_channels(&self, count: usize) -> Vec<Rc<RefCell<ChannelState>>> {
        let shared = self.shared.borrow();
        shared.channels[shared.channels.len() - count..].to_vec()
    }

    pub fn busy_channels(&self) -> usize {
        self.shared
            .borrow()
            .channels
            .iter()
            .filter(|c| c.borrow().busy)
            .count()
    }
}

impl Backend for FakeBackend {
    fn open_display(&mut self, _options: &WindowOptions) -> Result<Box<dyn Display>> {
        self.shared.borrow_mut().displays_opened += 1;
        Ok(Box::new(FakeDisplay {
            shared: self.shared.clone(),
        }))
    }

    fn open_output(&mut self) -> Result<Box<dyn OutputDevice>> {
        let mut shared = self.shared.borrow_mut();
        if shared.fail_output {
            return Err(Error::Output("no audio device".to_string()));
        }
        shared.outputs_opened += 1;
        Ok(Box::new(FakeOutput {
            shared: self.shared.clone(),
        }))
    }
}

struct FakeDisplay {
    shared: Rc<RefCell<Shared>>,
}

impl Display for FakeDisplay {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.shared.borrow_mut().events.pop_front()
    }

    /// An exhausted script reads as a closed window
    fn wait_event(&mut self) -> InputEvent {
        self.poll_event().unwrap_or(InputEvent::Quit)
    }

    fn present(&mut self) -> Result<()> {
        self.shared.borrow_mut().presents += 1;
        Ok(())
    }
}

struct FakeOutput {
    shared: Rc<RefCell<Shared>>,
}

impl OutputDevice for FakeOutput {
    fn open_channel(&mut self) -> Result<Box<dyn Channel>> {
        let state = Rc::new(RefCell::new(ChannelState::default()));
        self.shared.borrow_mut().channels.push(state.clone());
        Ok(Box::new(FakeChannel(state)))
    }
}

struct FakeChannel(Rc<RefCell<ChannelState>>);

impl Channel for FakeChannel {
    fn play(&mut self, _clip: &SoundClip, volume: f32) -> Result<()> {
        let mut s = self.0.borrow_mut();
        s.busy = true;
        s.paused = false;
        s.plays += 1;
        s.volume = volume;
        Ok(())
    }

    fn pause(&mut self) {
        self.0.borrow_mut().paused = true;
    }

    fn resume(&mut self) {
        self.0.borrow_mut().paused = false;
    }

    fn stop(&mut self) {
        let mut s = self.0.borrow_mut();
        s.busy = false;
        s.paused = false;
    }

    fn is_busy(&self) -> bool {
        self.0.borrow().busy
    }

    fn set_volume(&mut self, volume: f32) {
        self.0.borrow_mut().volume = volume;
    }
}

/// Options that never reach a real synthesizer
pub fn test_options() -> Options {
    let mut options = Options::default();
    options.speech.program = "no-such-speech-synthesizer".to_string();
    options
}

/// Unloaded session on a fresh fake backend
pub fn fake_session() -> (Session, FakeBackend) {
    let backend = FakeBackend::default();
    let session = Session::with_backend(test_options(), backend.clone());
    (session, backend)
}

/// Loaded session with `channels` channels
pub fn loaded_session(channels: usize) -> (Session, FakeBackend) {
    let (mut session, backend) = fake_session();
    session.load(channels).expect("load on fake backend");
    (session, backend)
}

/// Build a 16-bit PCM WAV file in memory
pub fn wav_bytes(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
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

/// Write a short mono tone to `dir/name`
pub fn write_wav(dir: &Path, name: &str) -> PathBuf {
    let samples: Vec<i16> = (0..4000).map(|i| ((i % 40) * 500 - 10_000) as i16).collect();
    let path = dir.join(name);
    std::fs::write(&path, wav_bytes(1, 8000, &samples)).expect("write wav");
    path
}
