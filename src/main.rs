//! Super Penguin entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use super_penguin::Game;
    use super_penguin::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use super_penguin::platform::storage::LocalStore;
    use super_penguin::platform::{InputEvent, Key};
    use super_penguin::renderer::Canvas2d;
    use super_penguin::ui::{HudSink, HudView};

    /// HUD backed by DOM elements
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl HudSink for DomHud {
        fn show(&mut self, view: &HudView) {
            self.set_text("score", &view.score.to_string());
            self.set_text("fish", &view.fish.to_string());
            self.set_text("best", &view.best.to_string());

            if let Some(el) = self.document.get_element_by_id("message") {
                match &view.banner {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        let _ = el.class_list().remove_1("hidden");
                    }
                    None => {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }

            if let Some(body) = self.document.body() {
                let _ = body.class_list().toggle_with_force("dark", view.dark);
            }
        }
    }

    /// Everything the frame callback needs
    struct App {
        game: Game,
        surface: Canvas2d,
        hud: DomHud,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Super Penguin starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(Box::new(LocalStore::new()), seed);
        log::info!("Game initialized with seed: {}", seed);

        // The first run starts as soon as the page is up
        game.start();

        let app = Rc::new(RefCell::new(App {
            game,
            surface: Canvas2d::new(ctx),
            hud: DomHud {
                document: document.clone(),
            },
        }));

        setup_input_handlers(&document, &canvas, app.clone());

        request_animation_frame(app);

        log::info!("Super Penguin running!");
    }

    fn dispatch(app: &Rc<RefCell<App>>, event: InputEvent) {
        app.borrow_mut().game.handle_input(event);
    }

    fn setup_input_handlers(document: &Document, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Keyboard down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(&event.code());
                let input = if event.repeat() {
                    InputEvent::KeyRepeat(key)
                } else {
                    InputEvent::KeyDown(key)
                };
                if input.prevents_default() {
                    event.prevent_default();
                }
                dispatch(&app, input);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                dispatch(&app, InputEvent::KeyUp(Key::from_code(&event.code())));
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap/click on the play field
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                dispatch(&app, InputEvent::PointerDown);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // On-screen action button
        if let Some(btn) = document.get_element_by_id("action") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&app, InputEvent::ActionButton);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (keyups after this go elsewhere)
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                dispatch(&app, InputEvent::Blur);
                log::debug!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App { game, surface, hud } = &mut *guard;
            game.frame(time, surface, hud);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the headless demo (about five minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use super_penguin::Game;
    use super_penguin::platform::MemoryStore;
    use super_penguin::renderer::CommandRecorder;
    use super_penguin::ui::HeadlessHud;

    env_logger::init();
    log::info!("Super Penguin (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    let mut game = Game::new(Box::new(MemoryStore::new()), seed);
    let mut surface = CommandRecorder::new();
    let mut hud = HeadlessHud::default();
    game.start();

    let frame_ms = 1000.0 / 60.0;
    let mut frames = 0;
    for i in 0..DEMO_FRAMES {
        autopilot(&mut game);
        surface.clear();
        frames = i + 1;
        if game.frame(i as f64 * frame_ms, &mut surface, &mut hud).crashed {
            break;
        }
    }

    let state = game.state();
    println!(
        "Seed {}: {} frames, score {}, fish {}, best {}{}",
        seed,
        frames,
        state.display_score(),
        state.fish,
        state.best,
        if state.game_over { " (crashed)" } else { "" }
    );
    println!("Last frame issued {} draw calls", surface.len());
}

/// Jump when a spike gets close. Good enough to survive a while.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &mut super_penguin::Game) {
    use super_penguin::platform::{InputEvent, Key};

    let state = game.state();
    let player = state.player.hitbox();
    let reaction = 20.0 + state.speed * 6.0;
    let danger = state.obstacles.iter().any(|o| {
        let gap = o.x - player.right();
        (0.0..reaction).contains(&gap)
    });

    if danger && state.player.on_ground() {
        game.handle_input(InputEvent::KeyDown(Key::Space));
        game.handle_input(InputEvent::KeyUp(Key::Space));
    }
}
