//! Glide physics
//!
//! A glide is the decaying-velocity record of one coasting surface. Each
//! step yields the displacement to apply this frame and multiplies the
//! velocity by the decay factor; the glide is finished once the velocity
//! magnitude drops under the stop epsilon.
//!
//! Both constants are per-step values calibrated against a ~60 Hz refresh:
//! with the default 0.95 decay, a flick needs roughly two seconds of frames
//! to cross a 0.1 epsilon. Hosts ticking much faster will see shorter,
//! tighter coasts.

/// Decaying-velocity physics for one coasting surface
#[derive(Clone, Copy, Debug)]
pub struct Glide {
    velocity: f32,
    decay_per_step: f32,
    stop_epsilon: f32,
}

impl Glide {
    /// Create a glide from a release velocity (pixels per step)
    ///
    /// `decay_per_step` is clamped to `0.0..=0.999`; a factor of 1.0 would
    /// never settle.
    pub fn new(velocity: f32, decay_per_step: f32, stop_epsilon: f32) -> Self {
        Self {
            velocity,
            decay_per_step: decay_per_step.clamp(0.0, 0.999),
            stop_epsilon,
        }
    }

    /// Current velocity (pixels per step)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance one frame: returns this step's displacement, then decays
    ///
    /// The undecayed velocity is what moves the surface this frame; decay
    /// applies afterwards, so a glide released at velocity v displaces by
    /// v, then v·decay, then v·decay², …
    pub fn step(&mut self) -> f32 {
        let displacement = self.velocity;
        self.velocity *= self.decay_per_step;
        displacement
    }

    /// Check whether the velocity has decayed under the stop epsilon
    pub fn is_settled(&self) -> bool {
        self.velocity.abs() < self.stop_epsilon
    }
}
