//! Frame timing
//!
//! Converts `requestAnimationFrame` timestamps (ms) into simulation delta.

use crate::consts::{MAX_FRAME_MS, TIME_SCALE};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulation delta since the previous frame.
    ///
    /// The first frame yields 0. Intervals are clamped to `MAX_FRAME_MS` so a
    /// backgrounded tab cannot teleport entities through the player.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let elapsed = match self.last_ms {
            Some(prev) => now_ms - prev,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        if elapsed <= 0.0 {
            return 0.0;
        }
        (elapsed.min(MAX_FRAME_MS) * TIME_SCALE) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(12_345.0), 0.0);
    }

    #[test]
    fn test_normal_frame() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        let dt = clock.delta(1016.0);
        assert!((dt - 1.6).abs() < 1e-5);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        let dt = clock.delta(6000.0);
        assert!((dt - 3.2).abs() < 1e-5);
    }

    #[test]
    fn test_backwards_and_nan_are_zero() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
        assert_eq!(clock.delta(f64::NAN), 0.0);
        // NaN is not remembered as the previous frame
        let dt = clock.delta(916.0);
        assert!((dt - 1.6).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn delta_is_bounded(stamps in proptest::collection::vec(0.0f64..1.0e7, 1..50)) {
            let mut clock = FrameClock::new();
            for t in stamps {
                let dt = clock.delta(t);
                prop_assert!((0.0..=3.2 + 1e-5).contains(&dt));
            }
        }
    }
}
