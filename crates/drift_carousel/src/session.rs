//! Live drag sessions
//!
//! A session exists from press to release and tracks just enough to turn
//! pointer samples into scroll deltas: the last horizontal position and the
//! most recent delta, which doubles as the instantaneous velocity handed to
//! the glide on release. The velocity is deliberately not a windowed
//! average; the final flick is what a throw should feel like.

use drift_platform::PointerSample;

/// Per-interaction record of an in-progress drag
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    last_x: f32,
    velocity: f32,
}

impl DragSession {
    /// Open a session at the press sample
    pub fn begin(sample: PointerSample) -> Self {
        Self {
            last_x: sample.x,
            velocity: 0.0,
        }
    }

    /// Advance to the next sample; returns the delta the surface scrolls by
    pub fn advance(&mut self, sample: PointerSample) -> f32 {
        let delta = sample.x - self.last_x;
        self.last_x = sample.x;
        self.velocity = delta;
        delta
    }

    /// Instantaneous velocity: the most recent move delta (pixels per event)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
