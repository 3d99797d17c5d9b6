use std::collections::VecDeque;

use super::event::{InputEvent, Key, TouchPhase, TurnSide};
use super::hud::HudLayout;
use super::state::InputState;
use crate::world::Viewport;

// ---------------------------------------------------------------------------
// Capability traits for the host environment
// ---------------------------------------------------------------------------

/// Source of input events. Called once at the start of every frame.
pub trait InputSource {
    /// Deliver every event received since the previous frame.
    fn pump(&mut self, controls: &mut Controls);
}

/// Source of the current drawable size.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

// ---------------------------------------------------------------------------
// Controls: event -> latched flag translation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Controls {
    state: InputState,
    hud: HudLayout,
    compact: bool,
}

impl Controls {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            state: InputState::default(),
            hud: HudLayout::for_viewport(viewport),
            compact: HudLayout::is_compact(viewport),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn hud(&self) -> &HudLayout {
        &self.hud
    }

    /// Throttle knob height on the HUD bar.
    pub fn knob_y(&self) -> f64 {
        self.hud.knob_y(self.state.throttle())
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.hud = HudLayout::for_viewport(viewport);
        self.compact = HudLayout::is_compact(viewport);
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.set_key(*key, true),
            InputEvent::KeyUp(key) => self.set_key(*key, false),
            // The HUD is only drawn on compact viewports; elsewhere touches hit nothing.
            InputEvent::Touch { .. } if !self.compact => {}
            InputEvent::Touch { phase, points } => {
                for p in points {
                    if let Some(throttle) = self.hud.throttle_at(p) {
                        self.state.set_throttle(i32::from(throttle));
                    }
                    if self.hud.left.contains(p) {
                        self.state.turn_left = true;
                    }
                    if self.hud.right.contains(p) {
                        self.state.turn_right = true;
                    }
                    // Only a fresh press toggles; dragging across the button does not.
                    if *phase == TouchPhase::Start && self.hud.engine.contains(p) {
                        self.state.engine_on = !self.state.engine_on;
                    }
                }
            }
            InputEvent::TouchEnd => self.state.release_turns(),
            InputEvent::SetEngine(on) => self.state.engine_on = *on,
            InputEvent::SetThrottle(percent) => self.state.set_throttle(*percent),
            InputEvent::TurnButton { side, pressed } => match side {
                TurnSide::Left => self.state.turn_left = *pressed,
                TurnSide::Right => self.state.turn_right = *pressed,
            },
        }
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowLeft => self.state.turn_left = pressed,
            Key::ArrowRight => self.state.turn_right = pressed,
            Key::Space => self.state.engine_on = pressed,
        }
    }
}

// ---------------------------------------------------------------------------
// Headless input sources
// ---------------------------------------------------------------------------

/// FIFO of events pushed by the host between frames.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputSource for EventQueue {
    fn pump(&mut self, controls: &mut Controls) {
        while let Some(event) = self.pending.pop_front() {
            controls.handle(&event);
        }
    }
}

/// Events keyed by the frame they fire on.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` for frame `frame` (0 is the first frame).
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.push((frame, event));
        self
    }
}

impl InputSource for ScriptedInput {
    fn pump(&mut self, controls: &mut Controls) {
        let frame = self.frame;
        for (_, event) in self.script.iter().filter(|(f, _)| *f == frame) {
            controls.handle(event);
        }
        self.frame += 1;
    }
}
