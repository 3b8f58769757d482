//! Configuration for drag behavior

/// Configuration for drag and coast behavior
///
/// Both values are per-tick quantities calibrated against a ~60 Hz refresh;
/// they directly determine perceived coast distance. The defaults reproduce
/// the reference feel: a flick at 40 px/tick coasts roughly 760 px.
#[derive(Debug, Clone, Copy)]
pub struct DragConfig {
    /// Velocity decay factor applied once per tick (0.0-1.0, lower = shorter coasts)
    pub decay_per_step: f32,
    /// Velocity magnitude under which a coast stops (pixels per tick)
    pub stop_epsilon: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            decay_per_step: 0.95,
            stop_epsilon: 0.1,
        }
    }
}

impl DragConfig {
    /// Create a config, clamping the decay factor into `0.0..=0.999`
    pub fn new(decay_per_step: f32, stop_epsilon: f32) -> Self {
        Self {
            decay_per_step: decay_per_step.clamp(0.0, 0.999),
            stop_epsilon,
        }
    }

    /// Create config with a brisker stop (roughly half the default coast)
    pub fn short_coast() -> Self {
        Self {
            decay_per_step: 0.9,
            ..Default::default()
        }
    }

    /// Create config with a floatier, longer coast
    pub fn long_coast() -> Self {
        Self {
            decay_per_step: 0.975,
            ..Default::default()
        }
    }
}
