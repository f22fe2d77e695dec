//! Rail Wing entry point
//!
//! Wires the browser frame clock and pointer events to the simulation. No
//! drawing happens here: a renderer consumes the published snapshot, and this
//! shell only maintains the DOM HUD.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use rail_wing::input::PointerSampler;
    use rail_wing::sim::{GameState, TickInput, tick};
    use rail_wing::tuning::Tuning;

    thread_local! {
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        sampler: PointerSampler,
        /// Fire trigger events queued since the last tick
        fire_queue: u32,
        tuning: Tuning,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed),
                sampler: PointerSampler::new(1.0, 1.0),
                fire_queue: 0,
                tuning,
            }
        }

        /// One simulation step per rendered frame. The state is swapped
        /// whole, so the HUD and any snapshot reader always see a complete
        /// frame.
        fn update(&mut self) {
            let input = TickInput {
                pointer: self.sampler.sample(),
                fire: self.fire_queue,
            };
            self.state = tick(&self.state, &input, &self.tuning);
            // Clear one-shot inputs after processing
            self.fire_queue = 0;
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document
                .query_selector("#hud-enemies .hud-value")
                .ok()
                .flatten()
            {
                let enemies = self
                    .state
                    .obstacles
                    .iter()
                    .filter(|o| o.kind.collides())
                    .count();
                el.set_text_content(Some(&enemies.to_string()));
            }
        }
    }

    /// Read-only hook for an external renderer: the full simulation state of
    /// the last completed frame, as JSON.
    #[wasm_bindgen]
    pub fn snapshot_json() -> String {
        GAME.with(|g| {
            g.borrow()
                .as_ref()
                .map(|game| serde_json::to_string(&game.borrow().state).unwrap_or_default())
                .unwrap_or_default()
        })
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rail Wing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let game = Rc::new(RefCell::new(Game::new(seed, tuning)));
        game.borrow_mut()
            .sampler
            .resize(canvas.client_width() as f32, canvas.client_height() as f32);
        GAME.with(|g| *g.borrow_mut() = Some(game.clone()));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Rail Wing running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - absolute canvas position feeds the sampler
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.sampler.resize(
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                g.sampler
                    .moved(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - one fire trigger per press, no rate limit
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().fire_queue += 1;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    g.sampler.resize(
                        canvas_clone.client_width() as f32,
                        canvas_clone.client_height() as f32,
                    );
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    g.sampler.moved(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start fires and steers at once
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.fire_queue += 1;
                if let Some(touch) = event.touches().get(0) {
                    g.sampler.resize(
                        canvas_clone.client_width() as f32,
                        canvas_clone.client_height() as f32,
                    );
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    g.sampler.moved(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.update_hud();
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use rail_wing::sim::{GameState, TickInput, tick};
    use rail_wing::tuning::Tuning;

    env_logger::init();
    log::info!("Rail Wing (native) starting...");

    let tuning = Tuning::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);

    // Headless demo: sweep the pointer and fire every 12th frame, standing in
    // for the browser frame clock.
    for frame in 0u64..600 {
        let t = frame as f32 / 60.0;
        let input = TickInput {
            pointer: Vec2::new((t * 0.7).sin() * 0.8, (t * 1.3).cos() * 0.5),
            fire: u32::from(frame % 12 == 0),
        };
        state = tick(&state, &input, &tuning);
    }

    log::info!(
        "demo done: {} projectiles and {} obstacles live",
        state.projectiles.len(),
        state.obstacles.len()
    );
    println!("final score after {} frames: {}", state.frame, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
