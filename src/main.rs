//! Block Racer entry point
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

    use block_racer::renderer::CanvasSurface;
    use block_racer::{Game, Settings};

    /// Browser-side game: the simulation plus its canvas
    struct WebGame {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Block Racer starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let settings = Settings::load();

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);
        body.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let web_game = Rc::new(RefCell::new(WebGame {
            game: Game::new(seed, settings),
            surface: CanvasSurface::new(ctx, window.clone()),
        }));

        setup_input_handlers(&window, web_game.clone())?;

        // Start game loop
        request_animation_frame(web_game);

        log::info!("Block Racer running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        web_game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        // Key down
        {
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                web_game.borrow_mut().game.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                web_game.borrow_mut().game.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(web_game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>) {
        {
            let mut g = web_game.borrow_mut();
            let WebGame { game, surface } = &mut *g;
            game.frame(surface);
        }

        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use block_racer::consts::{FRAME_RATE, KEY_LEFT, KEY_RIGHT};
    use block_racer::renderer::RecordingSurface;
    use block_racer::{FrameOutcome, Game, Settings};

    /// Frames to simulate (one minute at the nominal rate)
    const FRAMES: u32 = FRAME_RATE * 60;
    const SEED: u64 = 0x5EED;
    /// Frames per left/right sweep of the scripted input
    const SWEEP_FRAMES: u32 = 90;

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u32,
        rounds: u32,
        best_score: u32,
        final_score: u32,
        draw_commands: usize,
        alerts: usize,
    }

    pub fn run() -> Result<(), serde_json::Error> {
        let mut game = Game::new(SEED, Settings::load());
        let mut surface = RecordingSurface::default();
        let mut draw_commands = 0;

        for frame in 0..FRAMES {
            // Sweep left and right across the field
            if (frame / SWEEP_FRAMES) % 2 == 0 {
                game.key_up(KEY_RIGHT);
                game.key_down(KEY_LEFT);
            } else {
                game.key_up(KEY_LEFT);
                game.key_down(KEY_RIGHT);
            }

            if let FrameOutcome::RoundOver { cause, score } = game.frame(&mut surface) {
                log::debug!("Frame {}: round over ({:?}, score {})", frame, cause, score);
            }
            draw_commands += surface.commands.len();
            surface.clear_commands();
        }

        let summary = RunSummary {
            seed: game.seed(),
            frames: FRAMES,
            rounds: game.rounds(),
            best_score: game.best_score(),
            final_score: game.state().score,
            draw_commands,
            alerts: surface.alerts.len(),
        };
        log::debug!("Final state: {}", serde_json::to_string(game.state())?);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Racer (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    if let Err(e) = headless::run() {
        log::error!("Failed to write run summary: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
