use log::{debug, warn};
use crate::bridge::protocol::*;
use crate::renderer::traits::{DrawStats, FrameData, RenderTier, Renderer};

/// Renderer that serializes each frame into a flat `f32` buffer.
/// The host page reads the buffer through a pointer into wasm memory and
/// issues the real draw calls.
pub struct HostBufferRenderer {
    layout: FrameLayout,
    tier: RenderTier,
    buffer: Vec<f32>,
    surface: (u32, u32),
}

impl HostBufferRenderer {
    pub fn new(layout: FrameLayout, tier: RenderTier) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        Self { layout, tier, buffer, surface: (0, 0) }
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the buffer for host reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Last size passed to `resize`, in physical pixels.
    pub fn surface(&self) -> (u32, u32) {
        self.surface
    }
}

impl Renderer for HostBufferRenderer {
    fn backend(&self) -> &'static str {
        "host-buffer"
    }

    fn tier(&self) -> RenderTier {
        self.tier
    }

    fn draw(&mut self, frame: &FrameData) -> DrawStats {
        let layout = &self.layout;
        let sphere_count = frame.spheres.len().min(layout.max_instances);
        let event_count = frame.events.len().min(layout.max_events);
        let dropped = frame.spheres_dropped as usize
            + (frame.spheres.len() - sphere_count)
            + (frame.events.len() - event_count);
        if dropped > 0 {
            warn!("frame {}: {dropped} items exceed buffer capacity", frame.frame);
        }

        let (buffer_w, buffer_h) = frame.viewport.buffer_size();
        let header = &mut self.buffer[..HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = frame.frame as f32;
        header[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = sphere_count as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        header[HEADER_BUFFER_WIDTH] = buffer_w as f32;
        header[HEADER_BUFFER_HEIGHT] = buffer_h as f32;
        header[HEADER_PIXEL_RATIO] = frame.viewport.pixel_ratio();
        header[HEADER_BACKGROUND_SLOT] = frame.background.map(|(id, _)| id.0 as f32).unwrap_or(-1.0);
        header[HEADER_BACKGROUND_READY] = match frame.background {
            Some((_, true)) => 1.0,
            _ => 0.0,
        };
        header[HEADER_RENDER_TIER] = self.tier.code();
        header[HEADER_ELAPSED] = frame.elapsed;
        header[HEADER_SCROLL] = frame.scroll;
        header[HEADER_CSS_WIDTH] = frame.viewport.width;
        header[HEADER_CSS_HEIGHT] = frame.viewport.height;

        write_block(&mut self.buffer, layout.camera_offset, bytemuck::cast_slice(std::slice::from_ref(&frame.camera)));
        write_block(&mut self.buffer, layout.lighting_offset, bytemuck::cast_slice(std::slice::from_ref(&frame.lighting)));
        write_block(
            &mut self.buffer,
            layout.instance_data_offset,
            bytemuck::cast_slice(&frame.spheres[..sphere_count]),
        );
        write_block(
            &mut self.buffer,
            layout.event_data_offset,
            bytemuck::cast_slice(&frame.events[..event_count]),
        );

        DrawStats {
            spheres: sphere_count as u32,
            events: event_count as u32,
            dropped: dropped as u32,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("host surface resized to {width}x{height}");
        self.surface = (width, height);
    }
}

fn write_block(buffer: &mut [f32], offset: usize, floats: &[f32]) {
    buffer[offset..offset + floats.len()].copy_from_slice(floats);
}
