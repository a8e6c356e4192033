// Frame Clock
// Caps a polling loop at a fixed number of frames per second

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away the rest of each frame so a loop never spins faster than
/// its target rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Option<Duration>,
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// Create a clock targeting `fps` frames per second.
    ///
    /// A rate of zero disables the cap.
    pub fn new(fps: u32) -> Self {
        let frame = (fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(fps)));
        FrameClock {
            frame,
            last_tick: None,
        }
    }

    /// Target duration of one frame, if capped
    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Wait until the current frame is over.
    ///
    /// Returns the time since the previous tick, including the wait. The
    /// first tick after creation or `reset` only records the start time.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return Duration::ZERO;
        };

        if let Some(frame) = self.frame {
            let spent = now.duration_since(last);
            if spent < frame {
                thread::sleep(frame - spent);
            }
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now.duration_since(last)
    }

    /// Forget the previous tick
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
