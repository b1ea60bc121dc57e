//! Shape geometry derived from entity state
//!
//! Pure functions only; `scene` turns these into draw calls.

use glam::Vec2;

use crate::consts::{GROUND_Y, WORLD_WIDTH};
use crate::sim::{Fish, Obstacle};

/// Number of background clouds
pub const CLOUD_COUNT: usize = 3;
/// Horizontal distance between ground cracks
pub const CRACK_SPACING: f32 = 40.0;

/// Centre of cloud `index` at simulation time `time`.
///
/// Clouds drift right to left and wrap with 160 units of slack off-screen.
pub fn cloud_center(index: usize, time: f32) -> Vec2 {
    let period = WORLD_WIDTH + 160.0;
    let offset = (time * 0.02 + index as f32 * 180.0).rem_euclid(period) - 160.0;
    Vec2::new(WORLD_WIDTH - offset, 120.0 + index as f32 * 40.0)
}

/// Diagonal crack marks along the top of the ice
pub fn ground_cracks() -> impl Iterator<Item = (Vec2, Vec2)> {
    let count = (WORLD_WIDTH / CRACK_SPACING).ceil() as usize;
    (0..count).map(|i| {
        let x = i as f32 * CRACK_SPACING;
        (
            Vec2::new(x, GROUND_Y + 8.0),
            Vec2::new(x + 20.0, GROUND_Y + 18.0),
        )
    })
}

/// Ice spike outline: base corners and apex
pub fn spike(obstacle: &Obstacle) -> [Vec2; 3] {
    let (x, y, w, h) = (obstacle.x, obstacle.y(), obstacle.width, obstacle.height);
    [
        Vec2::new(x, y + h),
        Vec2::new(x + w / 2.0, y),
        Vec2::new(x + w, y + h),
    ]
}

/// Inner highlight of a spike
pub fn spike_highlight(obstacle: &Obstacle) -> [Vec2; 3] {
    let (x, y, w, h) = (obstacle.x, obstacle.y(), obstacle.width, obstacle.height);
    [
        Vec2::new(x + w * 0.28, y + h * 0.65),
        Vec2::new(x + w / 2.0, y + h * 0.35),
        Vec2::new(x + w * 0.72, y + h * 0.65),
    ]
}

/// Fish tail in fish-local space (fins extend past the hitbox)
pub fn fish_tail(fish: &Fish) -> [Vec2; 3] {
    [
        Vec2::new(fish.width, fish.height / 2.0),
        Vec2::new(fish.width + 12.0, 0.0),
        Vec2::new(fish.width + 12.0, fish.height),
    ]
}
