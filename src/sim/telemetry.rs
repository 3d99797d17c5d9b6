use nalgebra::Vector2;

use crate::vehicle::Vehicle;

/// Per-frame snapshot of the rocket, as shown on the info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub frame: u64,
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub speed: f64,
    pub altitude: f64,   // -y: up is positive
    pub heading: f64,
    pub throttle: u8,
    pub engine_on: bool,
}

impl Telemetry {
    pub fn capture(frame: u64, vehicle: &Vehicle) -> Self {
        Self {
            frame,
            pos: vehicle.pos,
            vel: vehicle.vel,
            speed: vehicle.speed(),
            altitude: -vehicle.pos.y,
            heading: vehicle.heading,
            throttle: vehicle.throttle,
            engine_on: vehicle.engine_on,
        }
    }

    /// Info panel text, one entry per line.
    pub fn info_lines(&self) -> [String; 5] {
        [
            format!("Position: ({:.0}, {:.0})", self.pos.x, self.pos.y),
            format!("Velocity: ({:.2}, {:.2})", self.vel.x, self.vel.y),
            format!("Speed: {:.2}", self.speed),
            format!("Altitude: {:.0}", self.altitude),
            format!("Throttle: {}%", self.throttle),
        ]
    }
}

/// Summary statistics over a recorded flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub frames: u64,
    pub max_speed: f64,
    pub max_altitude: f64,
    pub max_altitude_frame: u64,
    pub burn_frames: u64,
    pub final_pos: Vector2<f64>,
    pub final_speed: f64,
}

impl FlightSummary {
    /// `None` for an empty trace.
    pub fn from_trace(trace: &[Telemetry]) -> Option<Self> {
        let last = trace.last()?;
        let apex = trace
            .iter()
            .max_by(|a, b| a.altitude.total_cmp(&b.altitude))?;
        let max_speed = trace.iter().map(|t| t.speed).fold(0.0_f64, f64::max);
        let burn_frames = trace
            .iter()
            .filter(|t| t.engine_on && t.throttle > 0)
            .count() as u64;

        Some(FlightSummary {
            frames: trace.len() as u64,
            max_speed,
            max_altitude: apex.altitude,
            max_altitude_frame: apex.frame,
            burn_frames,
            final_pos: last.pos,
            final_speed: last.speed,
        })
    }
}
