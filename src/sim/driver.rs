use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::{ApproachDetector, BoundaryDetector, EventDetector, EventKind, SimEvent};
use super::telemetry::Telemetry;
use crate::config::SimConfig;
use crate::input::{Controls, InputSource, ViewportSource};
use crate::vehicle::Vehicle;
use crate::world::World;

// ---------------------------------------------------------------------------
// Frame timing
// ---------------------------------------------------------------------------

/// How a frame maps onto simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TimeStep {
    /// One frame is one step, whatever the display rate.
    #[default]
    PerFrame,
    /// Increments scale with `elapsed_ms / target_frame_ms`.
    Scaled { target_frame_ms: f64 },
}

impl TimeStep {
    /// Step scale for a frame that took `elapsed_ms` (if known).
    pub fn scale(&self, elapsed_ms: Option<f64>) -> f64 {
        match (self, elapsed_ms) {
            (TimeStep::PerFrame, _) | (TimeStep::Scaled { .. }, None) => 1.0,
            (TimeStep::Scaled { target_frame_ms }, Some(ms)) => (ms / target_frame_ms).max(0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation: sole owner of world, vehicle and controls
// ---------------------------------------------------------------------------

pub struct Simulation {
    world: World,
    vehicle: Vehicle,
    controls: Controls,
    time_step: TimeStep,
    frame: u64,
    detectors: Vec<Box<dyn EventDetector>>,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let world = World::new(&config.world, config.viewport);
        let vehicle = Vehicle::new(config.start, config.vehicle);
        let controls = Controls::new(&config.viewport);
        info!(
            start_x = config.start.x,
            start_y = config.start.y,
            time_step = ?config.time_step,
            "simulation started"
        );
        Self {
            world,
            vehicle,
            controls,
            time_step: config.time_step,
            frame: 0,
            detectors: vec![Box::new(BoundaryDetector), Box::new(ApproachDetector)],
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::capture(self.frame, &self.vehicle)
    }

    /// Run `frames` per-frame steps at the current viewport, recording the
    /// starting snapshot plus one per frame.
    pub fn fly<I>(&mut self, input: &mut I, frames: u64) -> (Vec<Telemetry>, Vec<SimEvent>)
    where
        I: InputSource + ?Sized,
    {
        let viewport = *self.world.viewport();
        let mut trace = vec![self.telemetry()];
        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(self.frame_step(input, &viewport, None));
            trace.push(self.telemetry());
        }
        (trace, events)
    }

    /// Run one frame: viewport, input, physics, camera, in that order.
    /// Returns the events detected during the frame.
    pub fn frame_step<I, V>(
        &mut self,
        input: &mut I,
        viewport: &V,
        elapsed_ms: Option<f64>,
    ) -> Vec<SimEvent>
    where
        I: InputSource + ?Sized,
        V: ViewportSource + ?Sized,
    {
        let vp = viewport.viewport();
        if vp != *self.world.viewport() {
            self.world.resize(vp);
            self.controls.resize(&vp);
        }

        input.pump(&mut self.controls);
        let scale = self.time_step.scale(elapsed_ms);

        let controls = *self.controls.state();
        self.vehicle.engine_on = controls.engine_on;
        self.vehicle.throttle = controls.throttle();
        self.vehicle.turn(controls.turn_direction(), scale);

        let prev = self.vehicle.clone();
        self.vehicle.step(&self.world, scale);
        self.world.update_camera_scaled(&self.vehicle.pos, scale);

        let mut events = Vec::new();
        for detector in &mut self.detectors {
            if let Some(kind) = detector.check(&prev, &self.vehicle, &self.world) {
                match &kind {
                    EventKind::BoundaryContact(edges) => {
                        debug!(frame = self.frame, ?edges, "boundary contact")
                    }
                    EventKind::Approach { body } => {
                        info!(frame = self.frame, body = %body, "approaching body")
                    }
                }
                events.push(SimEvent { frame: self.frame, kind, pos: self.vehicle.pos });
            }
        }

        self.frame += 1;
        events
    }
}
