//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::consts::FRAME_DT;
    use brick_breaker::renderer::{FrameBatch, RenderState};
    use brick_breaker::{Game, GameConfig};

    /// Game instance plus everything the browser loop needs
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        batch: FrameBatch,
        last_time: f64,
        /// Overlay text currently shown, to avoid touching the DOM every frame
        shown_message: Option<String>,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            self.last_time = time;

            self.game.update(dt);
            self.game.render(&mut self.batch);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            self.update_overlay();
        }

        /// Mirror the frame's text runs into the `#message` element
        fn update_overlay(&mut self) {
            let run = self.batch.texts().last();
            let text = run.map(|r| r.text.clone());
            if text == self.shown_message {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document
                .get_element_by_id("message")
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };

            match run {
                Some(run) => {
                    el.set_text_content(Some(&run.text));
                    let style = el.style();
                    let _ = style.set_property("color", run.color.as_str());
                    let _ = style.set_property("font", &run.font.css());
                    let _ = style.set_property("left", &format!("{}px", run.pos.x));
                    let _ = style.set_property("top", &format!("{}px", run.pos.y - run.font.size));
                    let _ = el.set_attribute("class", "");
                }
                None => {
                    el.set_text_content(None);
                    let _ = el.set_attribute("class", "hidden");
                }
            }
            self.shown_message = text;
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");
        log::info!("Use A/D or ←/→ to move the paddle!");

        let config = GameConfig::default();
        if let Err(err) = config.validate() {
            log::error!("Refusing to start: {}", err);
            return;
        }

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Logical size is fixed; the backbuffer follows the pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (config.canvas_width as f64 * dpr) as u32;
        let height = (config.canvas_height as f64 * dpr) as u32;
        let _ = canvas.style().set_property("width", &format!("{}px", config.canvas_width));
        let _ = canvas.style().set_property("height", &format!("{}px", config.canvas_height));
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(&config, seed),
            render_state: None,
            batch: FrameBatch::new(),
            last_time: 0.0,
            shown_message: None,
        }));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.canvas_width, config.canvas_height),
        )
        .await
        {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(err) => log::error!("Failed to create device: {}", err),
        }

        setup_input_handlers(app.clone());

        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);

        // The loop never stops, even after the game is won or lost
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames the headless demo runs before giving up (two minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAME_LIMIT: u64 = 60 * 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::sim::GameStatus;
    use brick_breaker::{Game, GameConfig};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode has no window - running a headless autopilot demo");

    // Optional JSON override: `brick-breaker [config.json]`
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_json_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::error!("Refusing to start: {}", err);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    if let Err(err) = config.validate() {
        log::error!("Refusing to start: {}", err);
        std::process::exit(1);
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut game = Game::new(&config, seed);
    game.toggle_autopilot();

    let mut surface = RecordingSurface::new();
    let mut status = GameStatus::Playing;
    while status == GameStatus::Playing && game.state.frame < DEMO_FRAME_LIMIT {
        status = game.step();
    }

    game.render(&mut surface);
    let message = surface.texts().next().unwrap_or("(no message)").to_string();
    println!(
        "Seed {}: {:?} after {} frames, {} bricks left - {}",
        seed,
        status,
        game.state.frame,
        game.state.bricks.len(),
        message
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
