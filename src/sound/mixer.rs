//! Shared mixer state
//!
//! The session and every player hold a clone of the same [`Mixer`]. Loading
//! the session opens a channel pool and starts a new generation; exiting
//! closes the pool. Channel leases carry the generation they were issued
//! in, so a player that outlives an exit/load cycle is refused instead of
//! driving a channel that now belongs to someone else.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

use super::channel::{Channel, ChannelPool, OutputDevice};

/// A reserved channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLease {
    index: usize,
    generation: u64,
}

impl ChannelLease {
    /// Position of the channel in the pool
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Default)]
struct MixerState {
    pool: Option<ChannelPool>,
    generation: u64,
}

#[derive(Clone, Default)]
pub(crate) struct Mixer {
    state: Rc<RefCell<MixerState>>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, device: Box<dyn OutputDevice>, channels: usize) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.pool.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        state.pool = Some(ChannelPool::open(device, channels)?);
        state.generation += 1;
        Ok(())
    }

    /// Stop everything and drop the pool
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let mut pool = state.pool.take().ok_or(Error::NotInitialized)?;
        pool.stop_all();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().pool.is_some()
    }

    pub fn channel_count(&self) -> usize {
        self.state.borrow().pool.as_ref().map_or(0, ChannelPool::len)
    }

    pub fn free_channels(&self) -> usize {
        self.state
            .borrow()
            .pool
            .as_ref()
            .map_or(0, ChannelPool::free_count)
    }

    pub fn reserve(&self) -> Result<ChannelLease> {
        let mut state = self.state.borrow_mut();
        let generation = state.generation;
        let pool = state.pool.as_mut().ok_or(Error::NotInitialized)?;
        let index = pool.reserve()?;
        Ok(ChannelLease { index, generation })
    }

    /// Give a lease back. Leases from a closed generation are ignored.
    pub fn release(&self, lease: ChannelLease) {
        let mut state = self.state.borrow_mut();
        if state.generation != lease.generation {
            return;
        }
        if let Some(pool) = state.pool.as_mut() {
            pool.release(lease.index);
        }
    }

    /// Run `f` on the leased channel
    pub fn with_channel<R>(
        &self,
        lease: ChannelLease,
        f: impl FnOnce(&mut dyn Channel) -> R,
    ) -> Result<R> {
        let mut state = self.state.borrow_mut();
        if state.generation != lease.generation {
            return Err(Error::NotInitialized);
        }
        let channel = state
            .pool
            .as_mut()
            .and_then(|pool| pool.channel_mut(lease.index))
            .ok_or(Error::NotInitialized)?;
        Ok(f(channel))
    }
}
