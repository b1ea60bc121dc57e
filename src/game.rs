//! Session driver
//!
//! `Game` owns everything a session touches and is driven once per display
//! frame: consume pending intents, tick (only while running), draw the
//! scene (always), refresh the HUD.

use crate::palette::Palette;
use crate::persistence::{load_best, save_best};
use crate::platform::{FrameClock, InputEvent, Intent, IntentBuffer, KeyValueStore};
use crate::renderer::{DrawSurface, draw_scene};
use crate::sim::{GameState, Spawner, TickReport, tick};
use crate::tuning::Tuning;
use crate::ui::{HudSink, HudView};

pub struct Game {
    state: GameState,
    spawner: Spawner,
    intents: IntentBuffer,
    clock: FrameClock,
    tuning: Tuning,
    palette: Palette,
    store: Box<dyn KeyValueStore>,
    /// Last view pushed to the HUD (skip redundant DOM writes)
    last_hud: Option<HudView>,
}

impl Game {
    /// Idle game with the persisted best score and palette
    pub fn new(store: Box<dyn KeyValueStore>, seed: u64) -> Self {
        Self::with_tuning(store, seed, Tuning::default())
    }

    pub fn with_tuning(store: Box<dyn KeyValueStore>, seed: u64, tuning: Tuning) -> Self {
        let best = load_best(store.as_ref());
        let palette = Palette::load(store.as_ref());
        Self {
            state: GameState::new(best, tuning.base_speed),
            spawner: Spawner::new(seed),
            intents: IntentBuffer::new(),
            clock: FrameClock::new(),
            tuning,
            palette,
            store,
            last_hud: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Start a fresh run (also used for restart). Keeps `best`.
    pub fn start(&mut self) {
        self.state.reset(self.tuning.base_speed);
        self.spawner.reset();
        self.intents.clear_pulses();
        log::info!("Run started (best {})", self.state.best);
    }

    /// Record an input event. Only touches the intent buffer; the effect
    /// lands on the next frame.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Intent> {
        self.intents.handle(event)
    }

    /// Advance by `dt` simulation units, applying pending intents first
    pub fn step(&mut self, dt: f32) -> TickReport {
        if self.intents.restart.take() {
            self.start();
        } else if !self.state.is_running() && self.intents.tick.jump.is_pending() {
            // A press while idle starts a run and jumps straight away
            self.start();
            self.intents.tick.jump.fire();
        }

        let report = tick(
            &mut self.state,
            &mut self.spawner,
            &mut self.intents.tick,
            &self.tuning,
            dt,
        );

        if report.crashed {
            save_best(self.store.as_mut(), self.state.best);
            log::info!(
                "Game over: score {} fish {} best {}{}",
                self.state.display_score(),
                self.state.fish,
                self.state.best,
                if report.new_best { " (new best)" } else { "" }
            );
        }

        report
    }

    /// Draw the current state
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        draw_scene(surface, &self.state, &self.palette);
    }

    /// Push the HUD if anything changed
    pub fn update_hud(&mut self, hud: &mut dyn HudSink) {
        let view = HudView::from_state(&self.state);
        if self.last_hud.as_ref() != Some(&view) {
            hud.show(&view);
            self.last_hud = Some(view);
        }
    }

    /// One display frame at `now_ms` (a `requestAnimationFrame` timestamp)
    pub fn frame(
        &mut self,
        now_ms: f64,
        surface: &mut dyn DrawSurface,
        hud: &mut dyn HudSink,
    ) -> TickReport {
        let dt = self.clock.delta(now_ms);
        let report = self.step(dt);
        self.render(surface);
        self.update_hud(hud);
        report
    }
}
