//! Playback channels and the channel pool
//!
//! A channel plays one clip at a time. The pool opens a fixed number of
//! them up front and hands each one out to at most one owner.

use crate::error::{Error, Result};

use super::clip::SoundClip;

/// One playback slot in the mixer.
pub trait Channel {
    /// Start `clip` from the beginning, replacing whatever was playing.
    fn play(&mut self, clip: &SoundClip, volume: f32) -> Result<()>;

    /// Suspend playback in place.
    fn pause(&mut self);

    /// Continue after `pause`.
    fn resume(&mut self);

    /// Halt playback and drop the position.
    fn stop(&mut self);

    /// True while a clip is loaded and unfinished, paused or not.
    fn is_busy(&self) -> bool;

    /// Linear gain, 1.0 being the recorded level.
    fn set_volume(&mut self, volume: f32);
}

/// An opened audio output that can create channels.
pub trait OutputDevice {
    fn open_channel(&mut self) -> Result<Box<dyn Channel>>;
}

struct Slot {
    channel: Box<dyn Channel>,
    reserved: bool,
}

/// Fixed set of channels sharing one output device
pub struct ChannelPool {
    // Declared before the device so channels close first
    slots: Vec<Slot>,
    _device: Box<dyn OutputDevice>,
}

impl ChannelPool {
    /// Open `count` channels on `device`
    pub fn open(mut device: Box<dyn OutputDevice>, count: usize) -> Result<Self> {
        let mut slots = Vec::with_capacity(count);
        for _ in 0..count {
            slots.push(Slot {
                channel: device.open_channel()?,
                reserved: false,
            });
        }
        log::debug!("Opened {} playback channels", count);
        Ok(Self {
            slots,
            _device: device,
        })
    }

    /// Total number of channels
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Channels neither reserved nor playing
    pub fn free_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.reserved && !slot.channel.is_busy())
            .count()
    }

    /// Reserve the first free channel and return its index
    pub fn reserve(&mut self) -> Result<usize> {
        let index = self
            .slots
            .iter()
            .position(|slot| !slot.reserved && !slot.channel.is_busy())
            .ok_or(Error::NoChannelAvailable)?;
        self.slots[index].reserved = true;
        Ok(index)
    }

    /// Return a reservation to the pool
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.reserved = false;
        }
    }

    pub fn is_reserved(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.reserved)
    }

    pub fn channel(&self, index: usize) -> Option<&dyn Channel> {
        self.slots.get(index).map(|slot| slot.channel.as_ref())
    }

    pub fn channel_mut(&mut self, index: usize) -> Option<&mut (dyn Channel + 'static)> {
        self.slots.get_mut(index).map(|slot| slot.channel.as_mut())
    }

    /// Stop every busy channel
    pub fn stop_all(&mut self) {
        for slot in &mut self.slots {
            if slot.channel.is_busy() {
                slot.channel.stop();
            }
        }
    }
}
