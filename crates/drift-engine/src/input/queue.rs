/// Input event types the field understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse or first touch moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Touch ended or the mouse left the page.
    PointerLeave,
    /// The viewport changed size (CSS pixels).
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// Browser listeners push into the queue; the frame callback drains it.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
