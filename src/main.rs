//! Coin Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent};

    use coin_runner::audio::AudioManager;
    use coin_runner::platform::{self, WebEffects};
    use coin_runner::renderer::{CanvasSurface, render_quit_notice};
    use coin_runner::{Game, GameError, KeyOutcome, LoopControl, Settings};

    /// Everything the animation callback and key handlers share
    struct App {
        game: Game,
        surface: CanvasSurface,
        audio: AudioManager,
        /// An animation frame is already requested
        frame_pending: bool,
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Coin Runner starting...");

        let settings = Settings::load();
        let document = platform::document()?;
        let canvas = platform::canvas(&document)?;

        let surface = CanvasSurface::new(&canvas, &settings.assets)?;
        let audio = AudioManager::new(&settings.assets, &settings.audio)?;
        audio.ensure_music();

        let app = Rc::new(RefCell::new(App {
            game: Game::new(platform::now_seed(), settings.tuning.clone()),
            surface,
            audio,
            frame_pending: false,
        }));

        setup_input_handlers(&document, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Coin Runner running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let outcome = {
                    let mut a = app.borrow_mut();
                    // First gesture unlocks autoplay
                    a.audio.ensure_music();
                    a.game.key_down(&event.code())
                };
                if outcome != KeyOutcome::Ignored {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                }

                match outcome {
                    KeyOutcome::Resumed => request_animation_frame(app.clone()),
                    KeyOutcome::Restart => {
                        app.borrow_mut().game.restart(platform::now_seed());
                        request_animation_frame(app.clone());
                    }
                    KeyOutcome::Quit => {
                        platform::request_close();
                        // Still here: the browser refused
                        render_quit_notice(&mut app.borrow_mut().surface);
                    }
                    KeyOutcome::Ignored | KeyOutcome::Input | KeyOutcome::Paused => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.code());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        if app.borrow().frame_pending {
            return;
        }
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot schedule frame");
            return;
        };
        app.borrow_mut().frame_pending = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let control = {
            let mut a = app.borrow_mut();
            a.frame_pending = false;
            let App {
                game,
                surface,
                audio,
                ..
            } = &mut *a;
            let mut fx = WebEffects::new(surface, audio);
            game.frame(time, &mut fx)
        };

        if control == LoopControl::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {e}");
        web_sys::console::error_1(&format!("Coin Runner failed to start: {e}").into());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Runner (native) starting...");
    log::info!("The playable game is the wasm32 build; running a headless session");

    headless::run_session(headless::SESSION_SEED, headless::SESSION_FRAMES);
}

/// Scripted session against a recording surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use coin_runner::renderer::{RecordingSurface, render};
    use coin_runner::sim::{Effects, GameState, SoundCue};
    use coin_runner::{Game, LoopControl, Settings};

    pub const SESSION_SEED: u64 = 2024;
    pub const SESSION_FRAMES: u32 = 3600;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Default)]
    struct HeadlessEffects {
        surface: RecordingSurface,
        jumps: u32,
        coins: u32,
    }

    impl Effects for HeadlessEffects {
        fn play_sound(&mut self, cue: SoundCue) {
            match cue {
                SoundCue::Jump => self.jumps += 1,
                SoundCue::Coin => self.coins += 1,
            }
        }

        fn draw_frame(&mut self, state: &GameState) {
            self.surface.clear();
            render(&mut self.surface, state);
        }
    }

    pub fn run_session(seed: u64, frames: u32) {
        let settings = Settings::load();
        let mut game = Game::new(seed, settings.tuning);
        let mut fx = HeadlessEffects::default();

        // Run right the whole time, hopping every second
        game.key_down("ArrowRight");
        let mut frame = 0;
        while frame < frames {
            if frame % 60 == 0 {
                game.key_down("Space");
            } else if frame % 60 == 10 {
                game.key_up("Space");
            }
            let control = game.frame(frame as f64 * FRAME_MS, &mut fx);
            frame += 1;
            if control == LoopControl::Halt {
                break;
            }
        }

        let state = &game.state;
        log::info!(
            "Session ended after {frame} frames: phase {:?}, score {}, x {:.0}, {} jumps, {} coins",
            state.phase,
            state.score,
            state.player.pos.x,
            fx.jumps,
            fx.coins,
        );
        for (text, _, _) in fx.surface.texts() {
            println!("{text}");
        }
    }
}
