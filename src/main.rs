//! Bouncing Balls entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, KeyboardEvent, Window};

    use bouncing_balls::platform::dom;
    use bouncing_balls::renderer::CanvasSurface;
    use bouncing_balls::sim::SimState;
    use bouncing_balls::{Settings, Simulation};

    type App = Simulation<CanvasSurface, Element>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bouncing balls starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = dom::find_canvas(&document)?.ok_or_else(|| JsValue::from_str("no canvas"))?;

        // Captured once; later window resizes are not tracked
        let bounds = dom::size_canvas_to_window(&window, &canvas)?;
        let surface = CanvasSurface::new(&canvas)?;
        let readout = dom::create_count_readout(&document)?;

        let settings = Settings::load().checked(&bounds);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimState::new(&settings, bounds, seed);
        log::info!(
            "Spawned {} balls on {}x{} with seed {}",
            state.balls.len(),
            bounds.width,
            bounds.height,
            seed
        );

        let app = Rc::new(RefCell::new(Simulation::new(state, surface, readout)));
        setup_key_handler(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Bouncing balls running!");
        Ok(())
    }

    fn setup_key_handler(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().handle_key(&event.key());
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let result = app.borrow_mut().frame();
        match result {
            Ok(_) => request_animation_frame(app),
            Err(e) => log::error!("Rendering failed, frame loop stopped: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use bouncing_balls::consts::{HEADLESS_FRAMES, HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use bouncing_balls::hud::LogReadout;
    use bouncing_balls::renderer::RecordingSurface;
    use bouncing_balls::sim::{Bounds, SimState};
    use bouncing_balls::{Settings, Simulation};

    env_logger::init();
    log::info!("Bouncing balls (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the canvas");

    let bounds = Bounds::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let settings = Settings::load().checked(&bounds);
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let state = SimState::new(&settings, bounds, seed);
    log::info!("Spawned {} balls with seed {}", state.balls.len(), seed);

    let mut sim = Simulation::new(state, RecordingSurface::new(), LogReadout);

    // Sweep the evil circle right, down, left, down: one press every 4 frames
    const SWEEP: [&str; 4] = ["d", "s", "a", "s"];
    for frame in 0..HEADLESS_FRAMES {
        if frame % 4 == 0 {
            sim.handle_key(SWEEP[(frame / 40) as usize % SWEEP.len()]);
        }
        if let Err(e) = sim.frame() {
            log::error!("Rendering failed at frame {}: {}", frame, e);
            std::process::exit(1);
        }
        sim.surface_mut().clear();
    }

    log::info!(
        "{} of {} balls left after {} frames",
        sim.state().alive_count(),
        sim.state().balls.len(),
        HEADLESS_FRAMES
    );
}
