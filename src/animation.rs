/// A scalar that bounces between 0 and 1 by a fixed step.
#[derive(Debug, Copy, Clone)]
pub struct PingPong {
    value: f32,
    increment: f32,
}

impl PingPong {
    /// A non-finite `start` is treated as 0 and a non-finite `increment` as 0,
    /// so the value never leaves `[0, 1]`.
    pub fn new(start: f32, increment: f32) -> Self {
        let start = if start.is_finite() { start } else { 0.0 };
        let increment = if increment.is_finite() { increment } else { 0.0 };

        Self {
            value: start.clamp(0.0, 1.0),
            increment,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    #[cfg(test)]
    fn increment(&self) -> f32 {
        self.increment
    }

    /// Advances one step, reflecting off either bound and reversing direction.
    pub fn step(&mut self) -> f32 {
        let mut next = self.value + self.increment;

        if next > 1.0 {
            next = 2.0 - next;
            self.increment = -self.increment;
        } else if next < 0.0 {
            next = -next;
            self.increment = -self.increment;
        }

        // a step wider than the interval can still overshoot after reflecting
        self.value = next.clamp(0.0, 1.0);
        self.value
    }
}

impl Default for PingPong {
    fn default() -> Self {
        Self::new(0.0, 0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_unit_interval() {
        let mut p = PingPong::default();
        for _ in 0..100_000 {
            let v = p.step();
            assert!((0.0..=1.0).contains(&v), "value escaped: {v}");
        }
    }

    #[test]
    fn reverses_at_upper_bound() {
        let mut p = PingPong::new(0.95, 0.1);
        let v = p.step();
        assert!((v - 0.95).abs() < 1e-6);
        assert!(p.increment() < 0.0);
    }

    #[test]
    fn reverses_at_lower_bound() {
        let mut p = PingPong::new(0.02, -0.05);
        let v = p.step();
        assert!((v - 0.03).abs() < 1e-6);
        assert!(p.increment() > 0.0);
    }

    #[test]
    fn oversized_step_is_clamped() {
        let mut p = PingPong::new(0.5, 3.0);
        for _ in 0..10 {
            assert!((0.0..=1.0).contains(&p.step()));
        }
    }

    #[test]
    fn non_finite_inputs_keep_value_in_range() {
        let mut p = PingPong::new(0.5, f32::NAN);
        for _ in 0..10 {
            assert_eq!(p.step(), 0.5);
        }

        let mut p = PingPong::new(f32::NAN, 0.05);
        assert_eq!(p.value(), 0.0);
        assert!((p.step() - 0.05).abs() < 1e-6);

        let mut p = PingPong::new(f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(p.value(), 0.0);
        assert!((0.0..=1.0).contains(&p.step()));
    }

    #[test]
    fn start_is_clamped() {
        assert_eq!(PingPong::new(4.0, 0.05).value(), 1.0);
    }
}
