//! Sound playback
//!
//! - `SoundClip` decodes a file into memory
//! - `Channel` / `OutputDevice` are the seams to the audio backend
//! - `ChannelPool` owns the channels opened on `Session::load`
//! - `Player` binds one clip to one reserved channel
//! - `rodio_backend` provides the native output

pub mod channel;
pub mod clip;
pub(crate) mod mixer;
pub mod player;
pub mod rodio_backend;

pub use channel::{Channel, ChannelPool, OutputDevice};
pub use clip::{ClipSource, SoundClip};
pub use mixer::ChannelLease;
pub use player::Player;
pub use rodio_backend::{RodioOutput, SinkChannel};
