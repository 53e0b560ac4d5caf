//! WASM bridge: draws a Drift particle field onto a `<canvas>`.
//!
//! # Usage
//!
//! ```ignore
//! import init, { field_init, field_start, field_stop } from "./pkg/drift_web.js";
//!
//! await init();
//! field_init("particle-canvas", "wave");
//! field_start();
//! // later
//! field_stop();
//! ```
//!
//! `field_init` sizes the canvas to the window and listens for resize, mouse
//! and touch events itself; the `field_pointer_*` and `field_resize` exports
//! are for hosts that route input on their own.

pub mod canvas;
pub mod events;
pub mod runner;
pub mod scheduler;

use std::cell::RefCell;

use drift_engine::{FieldConfig, InputEvent, Preset};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use canvas::CanvasSurface;
pub use events::EventBindings;
pub use runner::FieldRunner;
pub use scheduler::AnimationScheduler;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner<CanvasSurface>>> = const { RefCell::new(None) };
    static SCHEDULER: RefCell<AnimationScheduler> = RefCell::new(AnimationScheduler::new());
    static BINDINGS: RefCell<Option<EventBindings>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut FieldRunner<CanvasSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("field not initialized; call field_init() first");
                None
            }
        }
    })
}

fn push_input(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Create the field on the canvas with id `canvas_id` using a named preset
/// (`constellation`, `wave` or `bloom`). Replaces any previous field.
#[wasm_bindgen]
pub fn field_init(canvas_id: &str, preset: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let preset: Preset = preset.parse().map_err(js_error)?;
    init_with_config(canvas_id, preset.config())?;
    log::info!("drift: initialized with preset {}", preset);
    Ok(())
}

/// Like [`field_init`], with a JSON [`FieldConfig`] overlaying the `wave` preset.
#[wasm_bindgen]
pub fn field_init_with_config(canvas_id: &str, json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = FieldConfig::from_json(json).map_err(js_error)?;
    init_with_config(canvas_id, config)?;
    log::info!("drift: initialized with custom config");
    Ok(())
}

fn init_with_config(canvas_id: &str, config: FieldConfig) -> Result<(), JsValue> {
    field_teardown();

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_error(format!("no element with id `{}`", canvas_id)))?
        .dyn_into()
        .map_err(|_| js_error(format!("element `{}` is not a canvas", canvas_id)))?;

    let surface = CanvasSurface::from_canvas(canvas)?;
    if surface.is_none() {
        log::warn!("2d context unavailable; frames will be skipped");
    }

    let entropy = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let seed = (js_sys::Date::now() as u64) ^ (entropy << 32);
    let mut runner = FieldRunner::new(config, seed, surface);
    if let Some((width, height)) = events::viewport_size(&window) {
        runner.resize(width, height);
    }
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    let bindings = EventBindings::attach(&window, push_input)?;
    BINDINGS.with(|cell| *cell.borrow_mut() = Some(bindings));
    Ok(())
}

/// Replace the running field's configuration with a JSON document.
#[wasm_bindgen]
pub fn field_load_config(json: &str) -> Result<(), JsValue> {
    let config = FieldConfig::from_json(json).map_err(js_error)?;
    with_runner(|r| r.load_config(config));
    Ok(())
}

/// Start (or resume) the animation loop.
#[wasm_bindgen]
pub fn field_start() -> Result<(), JsValue> {
    if with_runner(|r| r.start()).is_none() {
        return Ok(());
    }
    SCHEDULER.with(|cell| {
        cell.borrow_mut().start(|timestamp| {
            with_runner(|r| r.on_animation_frame(timestamp)).unwrap_or(false)
        })
    })
}

/// Stop the animation loop and cancel the pending frame. The last frame stays
/// on the canvas.
#[wasm_bindgen]
pub fn field_stop() {
    with_runner(|r| r.stop());
    SCHEDULER.with(|cell| cell.borrow_mut().stop());
}

#[wasm_bindgen]
pub fn field_is_running() -> bool {
    with_runner(|r| r.is_running()).unwrap_or(false)
}

/// Stop the loop, remove event listeners and drop the field.
#[wasm_bindgen]
pub fn field_teardown() {
    SCHEDULER.with(|cell| cell.borrow_mut().stop());
    BINDINGS.with(|cell| cell.borrow_mut().take());
    RUNNER.with(|cell| cell.borrow_mut().take());
}

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    push_input(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn field_pointer_leave() {
    push_input(InputEvent::PointerLeave);
}

#[wasm_bindgen]
pub fn field_resize(width: f32, height: f32) {
    push_input(InputEvent::Resize { width, height });
}

#[wasm_bindgen]
pub fn field_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}
