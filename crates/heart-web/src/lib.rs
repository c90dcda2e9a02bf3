//! Browser glue for the heart swarm.
//!
//! `heart_init("surface")` acquires the canvas, builds the swarm, binds the
//! pointer listeners and starts a 10 ms interval that drives the runner.
//! `heart_attach` does the same minus the interval, for pages that call
//! `heart_tick` from their own loop. The remaining exports inspect the swarm.

pub mod canvas;
pub mod runner;

pub use canvas::CanvasTarget;
pub use runner::SwarmRunner;

use std::cell::RefCell;

use heart_swarm::{InputEvent, SwarmError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Window};

/// Interval between scheduler callbacks, in milliseconds.
const TICK_INTERVAL_MS: i32 = 10;

thread_local! {
    static RUNNER: RefCell<Option<SwarmRunner<CanvasTarget>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SwarmRunner<CanvasTarget>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Swarm not initialized. Call heart_init() first.");
        f(runner)
    })
}

/// Only one swarm per page: a second init would double the listeners and the loop.
fn ensure_vacant<T>(slot: &RefCell<Option<T>>) -> Result<(), SwarmError> {
    if slot.borrow().is_some() {
        return Err(SwarmError::AlreadyInitialized);
    }
    Ok(())
}

fn to_js(err: SwarmError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn seed() -> u64 {
    let clock = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    clock ^ (noise << 32)
}

/// Acquire `<canvas id=canvas_id>`, start the swarm and the frame loop.
///
/// A missing canvas or 2D context is reported with a blocking alert and a
/// rejected call; nothing is drawn in that case. A second call (of this or
/// `heart_attach`) is rejected without touching the running swarm.
#[wasm_bindgen]
pub fn heart_init(canvas_id: &str) -> Result<(), JsValue> {
    let window = attach(canvas_id)?;
    start_interval(&window)?;
    log::info!("heart-web: running on #{}", canvas_id);
    Ok(())
}

/// Like `heart_init` but without the interval: the page drives the swarm
/// with `heart_tick`.
#[wasm_bindgen]
pub fn heart_attach(canvas_id: &str) -> Result<(), JsValue> {
    attach(canvas_id)?;
    log::info!("heart-web: attached to #{}, waiting for heart_tick", canvas_id);
    Ok(())
}

fn attach(canvas_id: &str) -> Result<Window, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = RUNNER.with(ensure_vacant) {
        log::warn!("heart-web: {}, ignoring #{}", err, canvas_id);
        return Err(to_js(err));
    }

    let window = web_sys::window()
        .ok_or_else(|| to_js(SwarmError::unavailable("no window")))?;

    let target = match CanvasTarget::acquire(&window, canvas_id) {
        Ok(target) => target,
        Err(err) => {
            log::error!("heart-web: {}", err);
            let _ = window.alert_with_message("No <canvas> support.");
            return Err(to_js(err));
        }
    };
    let canvas = target.canvas().clone();

    let runner = SwarmRunner::new(target, seed()).map_err(to_js)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    bind_pointer_events(&canvas)?;
    suppress_page_defaults(&window)?;
    Ok(window)
}

fn bind_pointer_events(canvas: &web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
    let on_down = Closure::<dyn FnMut(MouseEvent)>::new(|_event: MouseEvent| {
        with_runner(|r| r.push_input(InputEvent::PointerDown));
    });
    canvas.add_event_listener_with_callback_and_bool(
        "mousedown",
        on_down.as_ref().unchecked_ref(),
        true,
    )?;
    on_down.forget();

    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
        let (x, y) = (event.page_x() as f32, event.page_y() as f32);
        with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
    });
    canvas.add_event_listener_with_callback_and_bool(
        "mousemove",
        on_move.as_ref().unchecked_ref(),
        true,
    )?;
    on_move.forget();

    Ok(())
}

// Clicking is the explosion trigger, so keep the context menu and text
// selection out of the way.
fn suppress_page_defaults(window: &Window) -> Result<(), JsValue> {
    for name in ["selectstart", "contextmenu"] {
        let prevent = Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());
        window.add_event_listener_with_callback_and_bool(
            name,
            prevent.as_ref().unchecked_ref(),
            true,
        )?;
        prevent.forget();
    }
    Ok(())
}

fn start_interval(window: &Window) -> Result<(), JsValue> {
    let performance = window.performance();
    let now = move || match &performance {
        Some(p) => p.now(),
        None => js_sys::Date::now(),
    };

    let mut last = now();
    let tick = Closure::<dyn FnMut()>::new(move || {
        let current = now();
        let dt = ((current - last) / 1000.0) as f32;
        last = current;
        with_runner(|r| r.tick(dt));
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TICK_INTERVAL_MS,
    )?;
    tick.forget();
    Ok(())
}

// ---- Manual driving ----

/// Advance the swarm by `dt` seconds of wall time. Returns the ticks run.
///
/// Only for pages that started with `heart_attach`; after `heart_init` the
/// built-in interval already ticks, and calling this too doubles the speed.
#[wasm_bindgen]
pub fn heart_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn heart_pointer_down() {
    with_runner(|r| r.push_input(InputEvent::PointerDown));
}

#[wasm_bindgen]
pub fn heart_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn get_frame_count() -> f64 {
    with_runner(|r| r.frame_count())
}

#[wasm_bindgen]
pub fn get_config_json() -> Result<String, JsValue> {
    with_runner(|r| r.config().to_json()).map_err(to_js)
}
