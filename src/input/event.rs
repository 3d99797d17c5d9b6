use nalgebra::Vector2;

/// Keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Left,
    Right,
}

/// Host input, already translated to viewport-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// All points currently in contact with the screen.
    Touch { phase: TouchPhase, points: Vec<Vector2<f64>> },
    /// Every contact lifted.
    TouchEnd,
    /// Desktop engine checkbox.
    SetEngine(bool),
    /// Desktop throttle slider, percent.
    SetThrottle(i32),
    /// Desktop turn button held or released.
    TurnButton { side: TurnSide, pressed: bool },
}
