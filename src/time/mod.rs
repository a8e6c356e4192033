//! Frame pacing for the cooperative pause loop.

pub mod frame_clock;

pub use frame_clock::FrameClock;
