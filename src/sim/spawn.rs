//! Time-driven spawning of obstacles and fish

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Fish, GameState, Obstacle};
use crate::consts::{GROUND_Y, WORLD_WIDTH};
use crate::tuning::{Span, Tuning};

/// What a spawner step produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spawned {
    pub obstacles: u32,
    pub fish: u32,
}

/// Two independent timers feeding the entity lists
#[derive(Debug, Clone)]
pub struct Spawner {
    pub obstacle_timer: f32,
    pub fish_timer: f32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacle_timer: 0.0,
            fish_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Zero both timers (RNG stream continues)
    pub fn reset(&mut self) {
        self.obstacle_timer = 0.0;
        self.fish_timer = 0.0;
    }

    fn sample(&mut self, span: Span) -> f32 {
        span.sample(&mut self.rng)
    }

    /// Accumulate `dt` and spawn whatever came due
    pub fn update(&mut self, state: &mut GameState, tuning: &Tuning, dt: f32) -> Spawned {
        self.obstacle_timer += dt;
        self.fish_timer += dt;

        let mut spawned = Spawned::default();

        if self.obstacle_timer > tuning.obstacle_interval {
            let obstacle = self.make_obstacle(tuning);
            log::debug!(
                "Spawned obstacle {:.0}x{:.0} at x={:.0}",
                obstacle.width,
                obstacle.height,
                obstacle.x
            );
            state.obstacles.push(obstacle);
            self.obstacle_timer = 0.0;
            spawned.obstacles += 1;
        }

        if self.fish_timer > tuning.fish_interval {
            let fish = self.make_fish(tuning);
            log::debug!("Spawned fish at y={:.0}", fish.pos.y);
            state.fishes.push(fish);
            self.fish_timer = 0.0;
            spawned.fish += 1;
        }

        spawned
    }

    fn make_obstacle(&mut self, tuning: &Tuning) -> Obstacle {
        let height = self.sample(tuning.obstacle_height);
        let width = self.sample(tuning.obstacle_width);
        let spacing = self.sample(tuning.obstacle_spacing);
        let speed_bonus = self.sample(tuning.obstacle_speed_bonus);
        Obstacle::new(WORLD_WIDTH + spacing, width, height, speed_bonus)
    }

    fn make_fish(&mut self, tuning: &Tuning) -> Fish {
        let altitude = self.sample(tuning.fish_altitude);
        Fish::new(WORLD_WIDTH + tuning.fish_offset, GROUND_Y - altitude)
    }
}
