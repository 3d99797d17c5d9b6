use nalgebra::Vector2;

use crate::vehicle::Vehicle;
use crate::world::space::LABEL_RANGE_RADII;
use crate::world::{Edge, World};

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Edges newly touched this frame; a corner hit lists both.
    BoundaryContact(Vec<Edge>),
    Approach { body: String },
}

/// A discrete event that occurred during a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub frame: u64,
    pub kind: EventKind,
    pub pos: Vector2<f64>,
}

/// Trait for passive event detectors.
/// Implementations compare the vehicle before and after a frame.
pub trait EventDetector {
    fn check(&mut self, prev: &Vehicle, current: &Vehicle, world: &World) -> Option<EventKind>;
}

/// Fires when the vehicle reaches edges it was not touching before.
pub struct BoundaryDetector;

impl EventDetector for BoundaryDetector {
    fn check(&mut self, prev: &Vehicle, current: &Vehicle, world: &World) -> Option<EventKind> {
        let before = world.bounds().edges_touched(&prev.pos);
        let new_edges: Vec<Edge> = world
            .bounds()
            .edges_touched(&current.pos)
            .into_iter()
            .filter(|e| !before.contains(e))
            .collect();
        if new_edges.is_empty() {
            None
        } else {
            Some(EventKind::BoundaryContact(new_edges))
        }
    }
}

/// Fires when the vehicle comes within label range of a body.
pub struct ApproachDetector;

impl EventDetector for ApproachDetector {
    fn check(&mut self, prev: &Vehicle, current: &Vehicle, world: &World) -> Option<EventKind> {
        world
            .bodies()
            .iter()
            .find(|b| {
                let range = b.radius * LABEL_RANGE_RADII;
                b.distance_to(&prev.pos) >= range && b.distance_to(&current.pos) < range
            })
            .map(|b| EventKind::Approach { body: b.name.clone() })
    }
}
