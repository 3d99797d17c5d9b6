pub mod canvas;
pub mod scene;

#[cfg(test)]
pub(crate) mod recording;

pub use canvas::{Canvas, TextAlign, TransformStack};
pub use scene::{draw_frame, draw_hud, draw_info, draw_vehicle, draw_world};
