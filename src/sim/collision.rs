//! Collision detection and scoring
//!
//! The player's hitbox is computed once per tick and tested against every
//! obstacle, then every uncollected fish.

use super::state::GameState;
use crate::tuning::Tuning;

/// Result of a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Player touched an obstacle
    pub crashed: bool,
    /// Fish picked up this pass
    pub fish_collected: u32,
}

/// Resolve player contacts for the current tick.
///
/// An obstacle hit stops the pass immediately; the caller handles the
/// game-over transition. Otherwise each overlapping fish is collected and
/// scored.
pub fn resolve_collisions(state: &mut GameState, tuning: &Tuning) -> CollisionOutcome {
    let player_box = state.player.hitbox();

    if state
        .obstacles
        .iter()
        .any(|obstacle| player_box.overlaps(&obstacle.hitbox()))
    {
        return CollisionOutcome {
            crashed: true,
            fish_collected: 0,
        };
    }

    let mut collected = 0;
    for fish in state.fishes.iter_mut().filter(|f| !f.collected) {
        if player_box.overlaps(&fish.hitbox()) {
            fish.collected = true;
            collected += 1;
        }
    }

    if collected > 0 {
        state.fish += collected;
        state.score += tuning.fish_bonus * collected as f32;
        state.player.flash(tuning.pickup_flash_ticks);
        log::debug!("Collected {} fish (total {})", collected, state.fish);
    }

    CollisionOutcome {
        crashed: false,
        fish_collected: collected,
    }
}
