//! Bear Snake entry point
//!
//! wasm: wires the canvas, buttons and keyboard to the engine and drives it
//! with `setInterval`. native: runs a headless demo game on autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use bear_snake::audio::{AudioManager, SoundEffect};
    use bear_snake::consts::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
    use bear_snake::platform::IntervalScheduler;
    use bear_snake::renderer::CanvasRenderer;
    use bear_snake::sim::GamePhase;
    use bear_snake::{Command, Engine};

    /// Game instance holding all state
    struct Game {
        engine: Engine<IntervalScheduler>,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
    }

    impl Game {
        fn on_tick(&mut self) {
            self.engine.tick();
            self.present();
        }

        fn apply(&mut self, command: Command) {
            self.engine.apply(command);
            self.present();
        }

        /// Forward events to audio, then redraw
        fn present(&mut self) {
            for event in self.engine.drain_events() {
                log::debug!("{:?}", event);
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
            if let Some(ref renderer) = self.renderer {
                renderer.draw(&self.engine.snapshot());
            }
            self.update_hud();
        }

        /// Update score and status line in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.engine.state().score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("gameMessage") {
                el.set_text_content(Some(self.engine.phase().message()));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bear Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        if canvas.width() == 0 || canvas.height() == 0 {
            canvas.set_width((GRID_WIDTH as f64 * CELL_SIZE) as u32);
            canvas.set_height((GRID_HEIGHT as f64 * CELL_SIZE) as u32);
        }

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(&canvas);
        if renderer.is_none() {
            log::error!("2D canvas context unavailable - rendering disabled");
        }
        let game = Rc::new(RefCell::new(Game {
            engine: Engine::new(seed, IntervalScheduler::new()),
            renderer,
            audio: AudioManager::new(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Scheduler callback
        {
            let game_ref = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game_ref.borrow_mut().on_tick();
            });
            game.borrow_mut()
                .engine
                .scheduler_mut()
                .set_callback(closure);
        }

        setup_keyboard(game.clone());
        setup_buttons(game.clone());

        game.borrow_mut().present();
        log::info!("Bear Snake ready");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            if g.engine.phase() != GamePhase::Running {
                return;
            }
            if let Some(command) = Command::from_key(&event.key()) {
                // Arrow keys would otherwise scroll the page
                event.prevent_default();
                g.apply(command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in Command::BUTTON_IDS {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let Some(command) = Command::from_button_id(id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().apply(command);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Upper bound on demo length
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u32 = 5_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bear_snake::Engine;
    use bear_snake::platform::ManualScheduler;
    use bear_snake::sim::{GameEvent, GamePhase, autopilot};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Bear Snake (native demo) starting with seed {}", seed);

    let mut engine = Engine::new(seed, ManualScheduler::new());
    engine.start();

    let mut ticks = 0;
    let mut food = 0;
    let mut power_ups = 0;
    while engine.phase() == GamePhase::Running && ticks < DEMO_MAX_TICKS {
        autopilot::steer(engine.state_mut());
        let wait = engine.scheduler().until_next_ms().unwrap_or(0);
        ticks += engine.advance(wait);

        for event in engine.drain_events() {
            match event {
                GameEvent::FoodEaten { .. } | GameEvent::BonusEaten { .. } => food += 1,
                GameEvent::PowerUpEaten { .. } => power_ups += 1,
                GameEvent::IntervalChanged { ms } => log::info!("Speed now {} ms/tick", ms),
                _ => {}
            }
        }
    }

    let state = engine.state();
    println!("{}", state.phase.message());
    println!(
        "Score {} after {} ticks: {} food, {} power-ups, length {}",
        state.score,
        ticks,
        food,
        power_ups,
        state.snake.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
