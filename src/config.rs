//! Flight configuration with defaults and RON loading.

use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::TimeStep;
use crate::vehicle::VehicleTuning;
use crate::world::{Viewport, WorldConfig};

/// Top-level configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Initial drawable size; the host may resize later.
    pub viewport: Viewport,
    /// Flight model constants.
    pub vehicle: VehicleTuning,
    /// Bounds, bodies, starfield and camera.
    pub world: WorldConfig,
    /// Launch position in world units.
    pub start: Vector2<f64>,
    /// Per-frame or elapsed-time scaled integration.
    pub time_step: TimeStep,
    /// Log filter used when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            vehicle: VehicleTuning::default(),
            world: WorldConfig::default(),
            start: Vector2::new(0.0, 500.0),
            time_step: TimeStep::PerFrame,
            log_level: "info".to_string(),
        }
    }
}

impl SimConfig {
    /// Load and validate a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = ron::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)
    }

    /// Reject values the flight model cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            ));
        }
        let b = &self.world.bounds;
        if !b.is_valid() {
            return invalid(format!(
                "bounds need left < right and top < bottom, got {:?}",
                b
            ));
        }
        if !b.contains(&self.start) {
            return invalid(format!("start {:?} lies outside the bounds", self.start));
        }
        let v = &self.vehicle;
        if !(v.drag > 0.0 && v.drag <= 1.0) {
            return invalid(format!("drag must be in (0, 1], got {}", v.drag));
        }
        if !(v.max_velocity >= 0.0) {
            return invalid(format!("max_velocity must be >= 0, got {}", v.max_velocity));
        }
        if !(0.0..=1.0).contains(&v.bounce) {
            return invalid(format!("bounce must be in [0, 1], got {}", v.bounce));
        }
        let s = self.world.camera_smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return invalid(format!("camera_smoothing must be in (0, 1], got {}", s));
        }
        if let Some(body) = self.world.bodies.iter().find(|b| !(b.radius > 0.0)) {
            return invalid(format!("body {:?} needs a positive radius", body.name));
        }
        if let TimeStep::Scaled { target_frame_ms } = self.time_step {
            if !(target_frame_ms > 0.0) {
                return invalid(format!("target_frame_ms must be > 0, got {}", target_frame_ms));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn ron_round_trip() {
        let config = SimConfig::default();
        let text = config.to_ron().unwrap();
        let back = SimConfig::from_ron_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = SimConfig::from_ron_str("(vehicle: (drag: 0.99), world: (star_seed: Some(3)))")
            .unwrap();
        assert_eq!(config.vehicle.drag, 0.99);
        assert_eq!(config.vehicle.gravity, 0.05);
        assert_eq!(config.world.star_seed, Some(3));
        assert_eq!(config.world.bodies.len(), 4);
    }

    #[test]
    fn scaled_time_step_parses() {
        let config = SimConfig::from_ron_str("(time_step: Scaled(target_frame_ms: 16.0))").unwrap();
        assert_eq!(config.time_step, TimeStep::Scaled { target_frame_ms: 16.0 });
    }

    #[test]
    fn rejects_bad_drag() {
        let err = SimConfig::from_ron_str("(vehicle: (drag: 1.5))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_start_outside_bounds() {
        let mut config = SimConfig::default();
        config.start = Vector2::new(0.0, 5000.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn parse_error_is_reported() {
        let err = SimConfig::from_ron_str("(vehicle: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = SimConfig::load(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
