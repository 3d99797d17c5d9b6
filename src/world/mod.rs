pub mod body;
pub mod bounds;
pub mod camera;
pub mod space;
pub mod stars;

pub use body::{presets, CelestialBody, Color};
pub use bounds::{Bounds, Edge};
pub use camera::{Camera, Viewport};
pub use space::{World, WorldConfig};
pub use stars::Star;
