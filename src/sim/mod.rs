//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Seeded RNG only
//! - Time enters only through the `dt` handed to `tick`

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve_collisions};
pub use rect::Rect;
pub use spawn::{Spawned, Spawner};
pub use state::{Fish, GamePhase, GameState, Obstacle, Player};
pub use tick::{Pulse, TickInput, TickReport, tick};
