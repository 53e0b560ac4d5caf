//! Browser event listeners that feed the input queue.

use drift_engine::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MouseEvent, TouchEvent, Window};

type Listener = Closure<dyn FnMut(Event)>;

/// Registered window listeners. Dropping the bindings removes them.
pub struct EventBindings {
    window: Window,
    listeners: Vec<(&'static str, Listener)>,
}

impl EventBindings {
    /// Listen for resize, mouse and touch events on `window`, forwarding each
    /// as an [`InputEvent`] to `sink`.
    pub fn attach(
        window: &Window,
        sink: impl Fn(InputEvent) + Clone + 'static,
    ) -> Result<Self, JsValue> {
        let mut bindings = Self {
            window: window.clone(),
            listeners: Vec::with_capacity(5),
        };

        let on_resize = {
            let sink = sink.clone();
            let window = window.clone();
            move |_: Event| {
                if let Some((width, height)) = viewport_size(&window) {
                    sink(InputEvent::Resize { width, height });
                }
            }
        };
        bindings.listen("resize", on_resize)?;

        let on_mouse_move = {
            let sink = sink.clone();
            move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    sink(InputEvent::PointerMove {
                        x: mouse.client_x() as f32,
                        y: mouse.client_y() as f32,
                    });
                }
            }
        };
        bindings.listen("mousemove", on_mouse_move)?;

        let on_mouse_out = {
            let sink = sink.clone();
            move |event: Event| {
                // relatedTarget is null only when the pointer left the page
                let left_page = event
                    .dyn_ref::<MouseEvent>()
                    .is_some_and(|mouse| mouse.related_target().is_none());
                if left_page {
                    sink(InputEvent::PointerLeave);
                }
            }
        };
        bindings.listen("mouseout", on_mouse_out)?;

        let on_touch_move = {
            let sink = sink.clone();
            move |event: Event| {
                let first = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|touch| touch.touches().get(0));
                if let Some(touch) = first {
                    sink(InputEvent::PointerMove {
                        x: touch.client_x() as f32,
                        y: touch.client_y() as f32,
                    });
                }
            }
        };
        bindings.listen("touchmove", on_touch_move)?;

        bindings.listen("touchend", move |_: Event| sink(InputEvent::PointerLeave))?;

        Ok(bindings)
    }

    fn listen(
        &mut self,
        name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Inner size of the window in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f32, f32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
