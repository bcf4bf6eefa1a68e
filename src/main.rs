//! Twin Paddle entry point
//!
//! Browser: sets up the canvas, key listeners and the animation-frame loop.
//! Native: runs a headless match for a fixed number of frames and logs it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use twin_paddle::platform::CanvasSurface;
    use twin_paddle::sim::{GameEvent, KeyCode};
    use twin_paddle::{Game, Settings};

    /// Game plus the surface it draws on
    struct Host {
        game: Game,
        surface: CanvasSurface,
    }

    impl Host {
        fn frame(&mut self) {
            for event in self.game.advance_frame(&mut self.surface) {
                if let GameEvent::Scored(side) = event {
                    log::debug!("Point to {:?} at frame {}", side, self.game.state.frame);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Twin Paddle starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::default();
        canvas.set_width(settings.playfield_width as u32);
        canvas.set_height(settings.playfield_height as u32);

        let surface = CanvasSurface::new(&canvas).expect("Failed to get 2d context");
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Game::new(&settings, seed).expect("Invalid default settings");
        log::info!("Game initialized with seed: {}", seed);

        let host = Rc::new(RefCell::new(Host { game, surface }));

        setup_input_handlers(host.clone());
        request_animation_frame(host);
        log::info!("Twin Paddle running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.key_down(KeyCode(event.key_code()));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.key_up(KeyCode(event.key_code()));
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events for held keys never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                host.borrow_mut().game.input.release_all();
                log::debug!("Released all keys (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        host.borrow_mut().frame();
        request_animation_frame(host);
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

/// Frames to simulate when none are given (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Twin Paddle (native) starting...");

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// `twin-paddle [settings.json] [frames]`
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), Box<dyn std::error::Error>> {
    use twin_paddle::renderer::MeshSurface;
    use twin_paddle::sim::GameEvent;
    use twin_paddle::{Game, Settings};

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    let mut game = Game::new(&settings, seed)?;
    let mut surface = MeshSurface::new(settings.playfield()?);
    log::info!("Game initialized with seed: {}", seed);

    let mut paddle_hits = 0u64;
    let mut wall_bounces = 0u64;
    let mut top_speed = game.state.ball.speed();

    for _ in 0..frames {
        for event in game.advance_frame(&mut surface) {
            match event {
                GameEvent::PaddleHit(_) => paddle_hits += 1,
                GameEvent::WallBounce(_) => wall_bounces += 1,
                GameEvent::Scored(_) => {}
            }
        }
        top_speed = top_speed.max(game.state.ball.speed());
    }

    log::info!(
        "Finished {} frames: score {} - {}, {} paddle hits, {} wall bounces, top speed {:.2}",
        game.state.frame,
        game.state.score.left,
        game.state.score.right,
        paddle_hits,
        wall_bounces,
        top_speed
    );
    log::debug!(
        "Last frame: {} vertices ({} bytes), {} labels",
        surface.vertices().len(),
        surface.vertex_bytes().len(),
        surface.labels().len()
    );

    Ok(())
}
