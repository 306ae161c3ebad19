//! Stack Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use stack_drop::renderer::CanvasSurface;
    use stack_drop::{Game, Settings};

    const CANVAS_ID: &str = "gameCanvas";

    /// Game plus its drawing surface
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("Logger init failed: {}", e)));
        }

        log::info!("Stack Drop starting...");

        let settings = Settings::load();
        let tuning = &settings.tuning;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Reuse the page's canvas or create one sized to the playfield
        let canvas: HtmlCanvasElement = match document.get_element_by_id(CANVAS_ID) {
            Some(el) => el.dyn_into()?,
            None => {
                let c: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                c.set_id(CANVAS_ID);
                c.set_width(tuning.playfield_width as u32);
                c.set_height(tuning.playfield_height as u32);
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("no body"))?
                    .append_child(&c)?;
                c
            }
        };

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        let mut surface = CanvasSurface::new(ctx);
        surface.set_scale(canvas.width() as f64 / tuning.playfield_width as f64);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings),
            surface,
        }));

        setup_input_handlers(app.clone())?;
        request_animation_frame(app);

        log::info!("Stack Drop running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down: accelerate, lock, idle toggle
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                let code = event.code();
                if code == "KeyI" {
                    if !event.repeat() {
                        app.game.toggle_idle_mode();
                    }
                } else if app.game.input.key_down(&code) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: release accelerate, re-arm lock
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                if app.game.input.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App { game, surface } = &mut *guard;
            game.frame(time, surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use stack_drop::platform::FixedClock;
    use stack_drop::sim::GameEvent;
    use stack_drop::{Game, Settings, Tuning, run};

    /// Headless demo length (one minute at 60 Hz)
    const DEMO_FRAMES: usize = 3600;

    env_logger::init();
    log::info!("Stack Drop (native) starting...");
    log::info!("Browser build: run with `trunk serve`; native runs a headless autopilot demo");

    let mut settings = Settings::load();
    if let Some(path) = std::env::args().nth(1) {
        match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    settings.tuning = tuning;
                }
                Err(e) => log::warn!("Ignoring {}: {}", path, e),
            },
            Err(e) => log::warn!("Cannot read {}: {}", path, e),
        }
    }
    settings.idle_mode = true;

    let mut frames = run(Game::new(settings), FixedClock::sim_rate());
    let mut collapsed = 0;
    for frame in frames.by_ref().take(DEMO_FRAMES) {
        collapsed += frame
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::StackCollapsed { .. }))
            .count();
    }

    let state = &frames.game().state;
    log::info!(
        "Demo finished after {} ticks: {} levels, top width {:.1}, {} collapsed",
        state.time_ticks,
        state.tower.len(),
        state.tower.last().map(|p| p.width).unwrap_or(0.0),
        collapsed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
