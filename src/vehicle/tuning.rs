use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Per-frame flight constants
// ---------------------------------------------------------------------------

/// Flight model constants. All increments are per nominal frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleTuning {
    pub gravity: f64,         // uniform downward velocity increment
    pub thrust_scale: f64,    // velocity increment at 100% throttle
    pub rotation_speed: f64,  // rad per frame while a turn key is held
    pub max_velocity: f64,    // speed ceiling, world units per frame
    pub drag: f64,            // velocity multiplier, (0, 1]
    pub bounce: f64,          // fraction of normal speed kept on a wall hit
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            thrust_scale: 2.0,
            rotation_speed: 0.05,
            max_velocity: 15.0,
            drag: 0.998,
            bounce: 0.5,
        }
    }
}

impl VehicleTuning {
    /// Thrust increment for a throttle setting in percent.
    pub fn thrust_at(&self, throttle: u8) -> f64 {
        f64::from(throttle.min(100)) / 100.0 * self.thrust_scale
    }
}

// ---------------------------------------------------------------------------
// Tuning builder
// ---------------------------------------------------------------------------

pub struct TuningBuilder {
    tuning: VehicleTuning,
}

impl TuningBuilder {
    pub fn new() -> Self {
        Self { tuning: VehicleTuning::default() }
    }

    pub fn gravity(mut self, v: f64) -> Self { self.tuning.gravity = v; self }
    pub fn thrust_scale(mut self, v: f64) -> Self { self.tuning.thrust_scale = v; self }
    pub fn rotation_speed(mut self, v: f64) -> Self { self.tuning.rotation_speed = v; self }
    pub fn max_velocity(mut self, v: f64) -> Self { self.tuning.max_velocity = v; self }
    pub fn drag(mut self, v: f64) -> Self { self.tuning.drag = v; self }
    pub fn bounce(mut self, v: f64) -> Self { self.tuning.bounce = v; self }

    pub fn build(self) -> VehicleTuning {
        self.tuning
    }
}

impl Default for TuningBuilder {
    fn default() -> Self {
        Self::new()
    }
}
