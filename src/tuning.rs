//! Game balance
//!
//! Every number that shapes difficulty lives here so it can be tweaked
//! without touching the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open uniform range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a uniform value in `[min, max)`. An empty or unbounded span yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let valid = self.min < self.max && (self.max - self.min).is_finite();
        if !valid {
            return self.min;
        }
        // Float rounding can land exactly on `max`
        let v = rng.random_range(self.min..self.max);
        if v < self.max { v } else { float_below(self.max).max(self.min) }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v < self.max
    }
}

/// Largest `f32` strictly less than a finite `x`
fn float_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Speed ===
    /// Scroll speed at the start of a run
    pub base_speed: f32,
    /// Maximum speed gained on top of `base_speed`
    pub speed_cap_bonus: f32,
    /// Speed gained per simulation time unit
    pub speed_ramp: f32,

    // === Obstacles ===
    /// Timer threshold between obstacle spawns
    pub obstacle_interval: f32,
    /// Distance past the right edge a new obstacle appears at
    pub obstacle_spacing: Span,
    pub obstacle_width: Span,
    pub obstacle_height: Span,
    /// Per-obstacle extra speed, fixed for its lifetime
    pub obstacle_speed_bonus: Span,

    // === Fish ===
    /// Timer threshold between fish spawns
    pub fish_interval: f32,
    /// Height above the ground line a fish floats at
    pub fish_altitude: Span,
    /// Distance past the right edge a new fish appears at
    pub fish_offset: f32,

    // === Scoring ===
    /// Score gained per simulation time unit survived
    pub score_rate: f32,
    /// Score bonus per fish
    pub fish_bonus: f32,
    /// Flash ticks after a pickup
    pub pickup_flash_ticks: u32,

    /// Entities are culled once their right edge is left of `-cull_margin`
    pub cull_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            speed_cap_bonus: 8.0,
            speed_ramp: 0.0015,

            obstacle_interval: 60.0,
            obstacle_spacing: Span::new(240.0, 420.0),
            obstacle_width: Span::new(30.0, 60.0),
            obstacle_height: Span::new(40.0, 100.0),
            obstacle_speed_bonus: Span::new(0.0, 0.8),

            fish_interval: 140.0,
            fish_altitude: Span::new(80.0, 200.0),
            fish_offset: 120.0,

            score_rate: 0.1,
            fish_bonus: 50.0,
            pickup_flash_ticks: 18,

            cull_margin: 40.0,
        }
    }
}

impl Tuning {
    /// Scroll speed after `time` simulation units
    pub fn speed_at(&self, time: f32) -> f32 {
        self.base_speed + self.speed_cap_bonus.min(time * self.speed_ramp)
    }

    /// Top speed reachable
    pub fn max_speed(&self) -> f32 {
        self.base_speed + self.speed_cap_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_speed_starts_at_base() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_at(0.0), 6.0);
    }

    #[test]
    fn test_speed_caps() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_at(5400.0), 14.0);
        assert_eq!(tuning.speed_at(1.0e6), 14.0);
        assert_eq!(tuning.max_speed(), 14.0);
    }

    /// Always yields the largest value the generator can produce
    struct SaturatedRng;

    impl rand::RngCore for SaturatedRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0xff);
        }
    }

    #[test]
    fn test_span_bounds() {
        let span = Span::new(240.0, 420.0);
        assert!(span.contains(240.0));
        assert!(!span.contains(420.0));
    }

    #[test]
    fn test_sample_at_top_of_generator_stays_below_max() {
        let tuning = Tuning::default();
        let spans = [
            tuning.obstacle_spacing,
            tuning.obstacle_width,
            tuning.obstacle_height,
            tuning.obstacle_speed_bonus,
            tuning.fish_altitude,
        ];
        for span in spans {
            let v = span.sample(&mut SaturatedRng);
            assert!(span.contains(v), "{} escapes {:?}", v, span);
        }
    }

    #[test]
    fn test_sample_single_value_span() {
        // Only `min` is representable below `max`
        let span = Span::new(1.0, 1.0 + f32::EPSILON);
        assert_eq!(span.sample(&mut SaturatedRng), 1.0);
        let mut rng = rand_pcg::Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(span.sample(&mut rng), 1.0);
        }
    }

    #[test]
    fn test_float_below() {
        assert_eq!(float_below(1.0 + f32::EPSILON), 1.0);
        assert!(float_below(420.0) < 420.0);
        assert!(float_below(0.0) < 0.0);
        assert!(float_below(-2.0) < -2.0);
    }

    #[test]
    fn test_empty_span_yields_min() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(3);
        assert_eq!(Span::new(5.0, 5.0).sample(&mut rng), 5.0);
        assert_eq!(Span::new(5.0, 2.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn test_tuning_json_roundtrip_keeps_defaults() {
        let json = serde_json::to_string(&Tuning::default()).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.obstacle_interval, 60.0);
        assert_eq!(back.fish_interval, 140.0);
        assert_eq!(back.pickup_flash_ticks, 18);
    }

    proptest! {
        #[test]
        fn sample_stays_in_span(seed in any::<u64>(), min in -500.0f32..500.0, len in 0.001f32..500.0) {
            let span = Span::new(min, min + len);
            let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
            for _ in 0..32 {
                let v = span.sample(&mut rng);
                prop_assert!(span.contains(v), "{} escapes {:?}", v, span);
            }
        }

        #[test]
        fn speed_is_monotonic_and_bounded(a in 0.0f32..20000.0, b in 0.0f32..20000.0) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tuning.speed_at(lo) <= tuning.speed_at(hi));
            prop_assert!(tuning.speed_at(hi) <= tuning.max_speed());
            prop_assert!(tuning.speed_at(lo) >= tuning.base_speed);
        }
    }
}
