/// Latched control flags, sampled once per frame by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub engine_on: bool,
    throttle: u8,
}

impl InputState {
    pub fn throttle(&self) -> u8 {
        self.throttle
    }

    /// Set throttle in percent; out-of-range values are clamped to 0..=100.
    pub fn set_throttle(&mut self, percent: i32) {
        self.throttle = percent.clamp(0, 100) as u8;
    }

    /// Net turn direction: -1 left, +1 right, 0 when neither or both are held.
    pub fn turn_direction(&self) -> f64 {
        match (self.turn_left, self.turn_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    pub fn release_turns(&mut self) {
        self.turn_left = false;
        self.turn_right = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_is_clamped() {
        let mut s = InputState::default();
        s.set_throttle(150);
        assert_eq!(s.throttle(), 100);
        s.set_throttle(-20);
        assert_eq!(s.throttle(), 0);
        s.set_throttle(42);
        assert_eq!(s.throttle(), 42);
    }

    #[test]
    fn both_turns_cancel() {
        let mut s = InputState { turn_left: true, turn_right: true, ..Default::default() };
        assert_eq!(s.turn_direction(), 0.0);
        s.turn_right = false;
        assert_eq!(s.turn_direction(), -1.0);
        s.release_turns();
        assert_eq!(s.turn_direction(), 0.0);
    }
}
