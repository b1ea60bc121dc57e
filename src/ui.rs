//! HUD model
//!
//! Three counters and a game-over banner. The browser writes these into DOM
//! elements; headless runs just keep the latest view.

use crate::sim::GameState;

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Current score, floored
    pub score: u64,
    pub fish: u32,
    pub best: u64,
    /// Game-over message; `None` hides the banner
    pub banner: Option<String>,
    /// Dimmed page theme after a crash
    pub dark: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let score = state.display_score();
        let banner = state.game_over.then(|| crash_message(score, state.fish));
        Self {
            score,
            fish: state.fish,
            best: state.best,
            banner,
            dark: state.game_over,
        }
    }
}

/// Banner text shown after a crash
pub fn crash_message(score: u64, fish: u32) -> String {
    format!(
        "You crashed! Score {} · Fish {}. Press R to restart.",
        score, fish
    )
}

/// Receives HUD updates
pub trait HudSink {
    fn show(&mut self, view: &HudView);
}

/// Keeps the most recent view
#[derive(Debug, Clone, Default)]
pub struct HeadlessHud {
    pub last: Option<HudView>,
    pub updates: usize,
}

impl HudSink for HeadlessHud {
    fn show(&mut self, view: &HudView) {
        self.last = Some(view.clone());
        self.updates += 1;
    }
}
