//! Self-rescheduling `requestAnimationFrame` loop with explicit cancellation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owns the frame closure and the id of the pending request.
///
/// The closure holds a handle to its own slot so it can request the next
/// frame; `stop` breaks that cycle by cancelling the request and dropping it.
pub struct AnimationScheduler {
    callback: FrameCallback,
    request_id: Rc<Cell<Option<i32>>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            request_id: Rc::new(Cell::new(None)),
        }
    }

    /// Whether a frame request is pending.
    pub fn is_scheduled(&self) -> bool {
        self.request_id.get().is_some()
    }

    /// Start calling `on_frame(timestamp_ms)` once per display frame until it
    /// returns false or [`AnimationScheduler::stop`] is called.
    pub fn start(
        &mut self,
        mut on_frame: impl FnMut(f64) -> bool + 'static,
    ) -> Result<(), JsValue> {
        if self.is_scheduled() {
            return Ok(());
        }

        let slot = self.callback.clone();
        let request_id = self.request_id.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            request_id.set(None);
            if !on_frame(timestamp) {
                return;
            }
            let next = slot.borrow().as_ref().map(request_frame);
            match next {
                Some(Ok(id)) => request_id.set(Some(id)),
                Some(Err(err)) => log::error!("requestAnimationFrame failed: {:?}", err),
                None => {}
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match self.callback.borrow().as_ref() {
            Some(cb) => request_frame(cb)?,
            None => return Ok(()),
        };
        self.request_id.set(Some(id));
        Ok(())
    }

    /// Cancel the pending frame and release the closure.
    pub fn stop(&mut self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::error!("cancelAnimationFrame failed: {:?}", err);
                }
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
