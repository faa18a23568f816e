//! Glimmerbox entry point
//!
//! Picks a toy from the URL hash (`#stars` for the star field, anything
//! else for the firefly duel), wires up input events and drives the
//! animation-frame loop. Native builds run a short headless demo of each
//! core instead.

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glimmerbox::consts::*;
    use glimmerbox::firefly::{FireflyGame, TickInput};
    use glimmerbox::render;
    use glimmerbox::stars::StarField;
    use glimmerbox::{HighScores, Settings};

    /// Which toy the page is showing
    enum Toy {
        Firefly(FireflyGame),
        Stars(StarField),
    }

    struct App {
        toy: Toy,
        settings: Settings,
        highscores: HighScores,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        /// Set once the current round's score has been recorded
        score_recorded: bool,
    }

    impl App {
        fn new(width: f32, height: f32) -> Self {
            let settings = Settings::load();
            let seed = js_sys::Date::now() as u64;
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();

            let toy = if hash == "#stars" {
                let mut field = StarField::new(seed, width, height);
                field.spawn_interval_mean = settings.effective_spawn_interval();
                Toy::Stars(field)
            } else {
                Toy::Firefly(FireflyGame::new(seed, width, height))
            };

            Self {
                toy,
                settings,
                highscores: HighScores::load(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                score_recorded: false,
            }
        }

        /// Advance the active toy by the frame delta
        fn update(&mut self, time_ms: f64) {
            let dt = if self.last_time > 0.0 {
                ((time_ms - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time_ms;
            let dt = dt.min(0.1);

            match &mut self.toy {
                Toy::Firefly(game) => {
                    self.accumulator += dt;
                    let mut substeps = 0;
                    while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        game.tick(&self.input, SIM_DT);
                        self.accumulator -= SIM_DT;
                        substeps += 1;
                        self.input.restart = false;
                    }

                    if game.game_over && !self.score_recorded {
                        self.score_recorded = true;
                        if let Some(rank) = self
                            .highscores
                            .add_score(game.score, js_sys::Date::now())
                        {
                            log::info!("score {} ranked #{rank}", game.score);
                            self.highscores.save();
                        }
                    }
                    if !game.game_over {
                        self.score_recorded = false;
                    }
                }
                Toy::Stars(field) => {
                    field.tick(dt);
                }
            }
        }

        fn draw(&self, ctx: &CanvasRenderingContext2d) {
            let result = match &self.toy {
                Toy::Firefly(game) => render::firefly::draw_game(
                    ctx,
                    game,
                    self.settings.effective_tails(),
                    self.settings.debug_overlay,
                ),
                Toy::Stars(field) => render::stars::draw_field(ctx, field),
            };
            if let Err(err) = result {
                log::error!("draw failed: {err:?}");
            }
        }

        fn on_key(&mut self, key: &str, pressed: bool) {
            let Toy::Firefly(_) = &self.toy else { return };
            match key {
                "a" => self.input.keys[0].left = pressed,
                "s" => self.input.keys[0].right = pressed,
                "k" => self.input.keys[1].left = pressed,
                "l" => self.input.keys[1].right = pressed,
                "Escape" if pressed => self.input.restart = true,
                _ => {}
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let document = match window.document() {
            Some(d) => d,
            None => return,
        };

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32;

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(c) => c,
            None => {
                log::error!("no #canvas element");
                return;
            }
        };
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into().ok())
        {
            Some(c) => c,
            None => {
                log::error!("no 2d context");
                return;
            }
        };

        let app = Rc::new(RefCell::new(App::new(width, height)));
        setup_keyboard(&document, app.clone());
        setup_pointer(&canvas, app.clone());

        // requestAnimationFrame loop
        let raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let raf_clone = raf.clone();
        let window_clone = window.clone();
        *raf.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
            {
                let mut app = app.borrow_mut();
                app.update(time_ms);
                app.draw(&ctx);
            }
            if let Some(closure) = raf_clone.borrow().as_ref() {
                let _ = window_clone.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }));
        if let Some(closure) = raf.borrow().as_ref() {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }

    fn setup_keyboard(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().on_key(&event.key(), true);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().on_key(&event.key(), false);
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Toy::Stars(field) = &mut app.borrow_mut().toy {
                    field.press_start(Vec2::new(
                        event.client_x() as f32,
                        event.client_y() as f32,
                    ));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Toy::Stars(field) = &mut app.borrow_mut().toy {
                    field.press_end();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glimmerbox::consts::SIM_DT;
    use glimmerbox::firefly::{FireflyGame, TickInput};
    use glimmerbox::mastermind::{Game, ROW_LEN};
    use glimmerbox::stars::StarField;

    env_logger::init();
    log::info!("glimmerbox (native) - running headless demos");

    // Mastermind: guess until solved, randomizing every pin
    let mut puzzle = Game::new(0xF1EF);
    let mut attempts = 0u32;
    while !puzzle.is_solved() {
        for i in 0..ROW_LEN {
            puzzle.randomize_pin(i);
        }
        let hint = puzzle.submit().expect("row was fully randomized");
        attempts += 1;
        log::debug!("guess {attempts}: {hint:?}");
    }
    println!("mastermind: solved in {attempts} random guesses");

    // Firefly: both flies hover for ten seconds
    let mut duel = FireflyGame::new(0xF1EF, 800.0, 600.0);
    let mut input = TickInput::default();
    for keys in &mut input.keys {
        keys.left = true;
        keys.right = true;
    }
    for _ in 0..(10.0 / SIM_DT) as u32 {
        duel.tick(&input, SIM_DT);
    }
    println!(
        "firefly: t={:.0}s score={} lives={:?} dead=[{}, {}]",
        duel.time, duel.score, duel.lives, duel.flies[0].dead, duel.flies[1].dead
    );

    // Stars: one minute of ambient spawning
    let mut field = StarField::new(0xF1EF, 800.0, 600.0);
    for _ in 0..(60.0 / SIM_DT) as u32 {
        field.tick(SIM_DT);
    }
    println!("stars: {} shapes visible after 60s", field.shapes.len());
}
