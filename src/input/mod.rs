pub mod controls;
pub mod event;
pub mod hud;
pub mod state;

pub use controls::{Controls, EventQueue, InputSource, ScriptedInput, ViewportSource};
pub use event::{InputEvent, Key, TouchPhase, TurnSide};
pub use hud::{HudLayout, Rect};
pub use state::InputState;
