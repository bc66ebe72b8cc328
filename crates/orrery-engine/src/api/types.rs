use bytemuck::{Pod, Zeroable};

/// Unique identifier for a node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A UI event communicated from Rust to the host page via the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;

    /// A panel's opacity changed. `a` = panel index, `b` = opacity.
    pub const PANEL_OPACITY: f32 = 1.0;
    /// The hovered body changed. `a` = body index, or -1 for none.
    pub const HOVER: f32 = 2.0;
    /// A texture slot fell back to its flat color. `a` = slot.
    pub const TEXTURE_FALLBACK: f32 = 3.0;

    pub fn panel_opacity(panel: usize, opacity: f32) -> Self {
        Self { kind: Self::PANEL_OPACITY, a: panel as f32, b: opacity, c: 0.0 }
    }

    pub fn hover(body: Option<usize>) -> Self {
        let a = body.map(|i| i as f32).unwrap_or(-1.0);
        Self { kind: Self::HOVER, a, b: 0.0, c: 0.0 }
    }

    pub fn texture_fallback(slot: u32) -> Self {
        Self { kind: Self::TEXTURE_FALLBACK, a: slot as f32, b: 0.0, c: 0.0 }
    }
}
