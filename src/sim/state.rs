//! Game state and core simulation types
//!
//! Everything a running session mutates lives in `GameState`. The only
//! value that survives a restart is `best`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run, or after a crash
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// The penguin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    pub ducking: bool,
    /// Ticks of pickup blink remaining (cosmetic only)
    pub flash_ticks: u32,
    /// Resting y (feet on the ground line)
    pub baseline: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PENGUIN_X, GROUND_Y - PENGUIN_HEIGHT),
            vel_y: 0.0,
            width: PENGUIN_WIDTH,
            height: PENGUIN_HEIGHT,
            ducking: false,
            flash_ticks: 0,
            baseline: GROUND_Y - PENGUIN_HEIGHT,
        }
    }
}

impl Player {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn on_ground(&self) -> bool {
        self.pos.y >= self.baseline - GROUND_EPSILON
    }

    /// Collision box. Ducking keeps the feet in place and lowers the head.
    pub fn hitbox(&self) -> Rect {
        let height = if self.ducking {
            self.height * DUCK_HEIGHT_FACTOR
        } else {
            self.height
        };
        Rect::new(
            self.pos.x,
            self.pos.y + (self.height - height),
            self.width,
            height,
        )
    }

    /// Advance one tick. Consumes a pending jump only when it fires.
    pub fn update(&mut self, input: &mut TickInput) {
        let grounded = self.on_ground();
        self.ducking = input.duck && grounded;

        // An airborne press stays pending and fires on landing
        if grounded && input.jump.take() {
            self.vel_y = -JUMP_FORCE;
        }

        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        if self.pos.y > self.baseline {
            self.pos.y = self.baseline;
            self.vel_y = 0.0;
        }

        self.flash_ticks = self.flash_ticks.saturating_sub(1);
    }

    /// Start the pickup blink
    pub fn flash(&mut self, ticks: u32) {
        self.flash_ticks = ticks;
    }

    /// Opacity for the current blink frame
    pub fn flicker_alpha(&self) -> f32 {
        if self.flash_ticks > 0 && self.flash_ticks % 6 >= 3 {
            0.3
        } else {
            1.0
        }
    }
}

/// An ice spike sitting on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Extra scroll speed, fixed at spawn
    pub speed_bonus: f32,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, height: f32, speed_bonus: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x,
            width,
            height,
            speed_bonus,
        }
    }

    /// Top edge (obstacles stand on the ground line)
    #[inline]
    pub fn y(&self) -> f32 {
        GROUND_Y - self.height
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y(), self.width, self.height)
    }

    pub fn update(&mut self, speed: f32, dt: f32) {
        self.x -= (speed + self.speed_bonus) * dt;
    }

    /// Scrolled fully past the left edge
    pub fn is_offscreen(&self, margin: f32) -> bool {
        self.x + self.width <= -margin
    }
}

/// A fish floating above the ice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub collected: bool,
}

impl Fish {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: FISH_WIDTH,
            height: FISH_HEIGHT,
            collected: false,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, self.width, self.height)
    }

    pub fn update(&mut self, speed: f32, dt: f32) {
        self.pos.x -= speed * dt;
    }

    /// Collected or scrolled fully past the left edge
    pub fn is_expired(&self, margin: f32) -> bool {
        self.collected || self.pos.x + self.width <= -margin
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Set when the last run ended in a crash
    pub game_over: bool,
    /// Current scroll speed
    pub speed: f32,
    /// Simulation time elapsed this run
    pub time: f32,
    /// Survival time plus pickup bonuses
    pub score: f32,
    /// Fish collected this run
    pub fish: u32,
    /// Best floored score across sessions
    pub best: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub fishes: Vec<Fish>,
}

impl GameState {
    /// Idle state with a previously persisted best score
    pub fn new(best: u64, base_speed: f32) -> Self {
        Self {
            phase: GamePhase::Idle,
            game_over: false,
            speed: base_speed,
            time: 0.0,
            score: 0.0,
            fish: 0,
            best,
            player: Player::default(),
            obstacles: Vec::new(),
            fishes: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Fresh running session; keeps `best`
    pub fn reset(&mut self, base_speed: f32) {
        *self = Self {
            phase: GamePhase::Running,
            ..Self::new(self.best, base_speed)
        };
    }

    /// Score as shown on the HUD
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Crash: stop running and fold the score into `best`.
    ///
    /// Returns true if `best` improved.
    pub fn end_game(&mut self) -> bool {
        self.phase = GamePhase::Idle;
        self.game_over = true;
        let final_score = self.display_score();
        if final_score > self.best {
            self.best = final_score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> Player {
        Player::default()
    }

    #[test]
    fn test_player_starts_grounded() {
        let player = grounded_player();
        assert!(player.on_ground());
        assert_eq!(player.pos.y, player.baseline);
        assert_eq!(player.baseline + player.height, GROUND_Y);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut player = grounded_player();
        let mut input = TickInput::default();
        input.jump.fire();
        player.update(&mut input);
        assert!(!player.on_ground());
        assert!((player.vel_y - (-JUMP_FORCE + GRAVITY)).abs() < 1e-5);
        assert!(!input.jump.is_pending());
    }

    #[test]
    fn test_player_lands_and_resets_velocity() {
        let mut player = grounded_player();
        let mut input = TickInput::default();
        input.jump.fire();
        for _ in 0..200 {
            player.update(&mut input);
            assert!(player.pos.y <= player.baseline);
        }
        assert!(player.on_ground());
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_airborne_press_fires_on_landing() {
        let mut player = grounded_player();
        let mut input = TickInput::default();
        input.jump.fire();
        player.update(&mut input);

        // Press again mid-air; nothing happens until touchdown
        input.jump.fire();
        let mut jumped_again = false;
        for _ in 0..200 {
            let was_grounded = player.on_ground();
            player.update(&mut input);
            if was_grounded && player.vel_y < 0.0 {
                jumped_again = true;
                break;
            }
            assert!(input.jump.is_pending() || player.on_ground());
        }
        assert!(jumped_again);
        assert!(!input.jump.is_pending());
    }

    #[test]
    fn test_duck_hitbox_anchored_at_feet() {
        let mut player = grounded_player();
        let standing = player.hitbox();
        let mut input = TickInput {
            duck: true,
            ..Default::default()
        };
        player.update(&mut input);
        let ducking = player.hitbox();

        assert!(player.ducking);
        assert!((ducking.height - standing.height * 0.6).abs() < 1e-4);
        assert!((ducking.y - (standing.y + standing.height * 0.4)).abs() < 1e-4);
        assert!((ducking.bottom() - standing.bottom()).abs() < 1e-4);
    }

    #[test]
    fn test_duck_ignored_in_air() {
        let mut player = grounded_player();
        let mut input = TickInput::default();
        input.jump.fire();
        player.update(&mut input);

        input.duck = true;
        player.update(&mut input);
        assert!(!player.ducking);
        assert_eq!(player.hitbox().height, player.height);
    }

    #[test]
    fn test_flash_counts_down_and_flickers() {
        let mut player = grounded_player();
        player.flash(18);
        let mut input = TickInput::default();
        let mut alphas = Vec::new();
        for _ in 0..20 {
            player.update(&mut input);
            alphas.push(player.flicker_alpha());
        }
        assert_eq!(player.flash_ticks, 0);
        assert!(alphas.contains(&0.3));
        assert_eq!(*alphas.last().unwrap(), 1.0);
    }

    #[test]
    fn test_obstacle_moves_left_with_bonus() {
        let mut obstacle = Obstacle::new(500.0, 30.0, 40.0, 0.5);
        obstacle.update(6.0, 2.0);
        assert!((obstacle.x - 487.0).abs() < 1e-4);
        assert_eq!(obstacle.hitbox().bottom(), GROUND_Y);
    }

    #[test]
    fn test_cull_margin() {
        let obstacle = Obstacle::new(-70.0, 30.0, 40.0, 0.0);
        assert!(obstacle.is_offscreen(40.0));
        let obstacle = Obstacle::new(-69.0, 30.0, 40.0, 0.0);
        assert!(!obstacle.is_offscreen(40.0));

        let mut fish = Fish::new(100.0, 200.0);
        assert!(!fish.is_expired(40.0));
        fish.collected = true;
        assert!(fish.is_expired(40.0));
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut state = GameState::new(120, 6.0);
        state.score = 300.7;
        state.fish = 4;
        state.obstacles.push(Obstacle::new(10.0, 30.0, 40.0, 0.0));
        state.reset(6.0);
        assert!(state.is_running());
        assert_eq!(state.best, 120);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.fish, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_end_game_floors_into_best() {
        let mut state = GameState::new(100, 6.0);
        state.reset(6.0);
        state.score = 250.9;
        assert!(state.end_game());
        assert_eq!(state.best, 250);
        assert!(state.game_over);
        assert_eq!(state.phase, GamePhase::Idle);

        state.reset(6.0);
        state.score = 90.0;
        assert!(!state.end_game());
        assert_eq!(state.best, 250);
    }
}
