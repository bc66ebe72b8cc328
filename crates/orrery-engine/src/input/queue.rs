/// Input event types the engine understands.
/// All coordinates are CSS pixels as reported by the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The cursor moved to (x, y), relative to the viewport's top-left corner.
    PointerMove { x: f32, y: f32 },
    /// The page scrolled; `y` is the vertical scroll offset in pixels.
    Scroll { y: f32 },
    /// The viewport changed size.
    Resize { width: f32, height: f32, device_pixel_ratio: f32 },
    /// A texture slot finished loading.
    TextureLoaded { slot: u32 },
    /// A texture slot failed to load.
    TextureFailed { slot: u32 },
}

/// A queue of input events.
/// Host callbacks push events between frames; the render loop drains them once per tick.
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

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
