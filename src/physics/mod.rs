pub mod gravity;

pub use gravity::{body_accel, planetary_accel, DEFAULT_GRAVITY_K};
