/// Frame buffer layout.
/// Must stay in sync with the host page's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: view_projection 16 + eye 4]
/// [Lighting: 8 floats]
/// [Spheres: max_instances × 16 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets.

use crate::api::app::AppConfig;
use crate::components::light::LightingUniform;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::SphereInstance;
use crate::api::types::UiEvent;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_BUFFER_WIDTH: usize = 6;
pub const HEADER_BUFFER_HEIGHT: usize = 7;
pub const HEADER_PIXEL_RATIO: usize = 8;
pub const HEADER_BACKGROUND_SLOT: usize = 9;
pub const HEADER_BACKGROUND_READY: usize = 10;
pub const HEADER_RENDER_TIER: usize = 11;
pub const HEADER_ELAPSED: usize = 12;
pub const HEADER_SCROLL: usize = 13;
pub const HEADER_CSS_WIDTH: usize = 14;
pub const HEADER_CSS_HEIGHT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block (fixed by the wire format).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats in the lighting block.
pub const LIGHTING_FLOATS: usize = LightingUniform::FLOATS;

/// Floats per sphere instance.
pub const INSTANCE_FLOATS: usize = SphereInstance::FLOATS;

/// Floats per UI event: kind, a, b, c.
pub const EVENT_FLOATS: usize = UiEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_instances: usize,
    pub max_events: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where the lighting block begins.
    pub lighting_offset: usize,
    /// Offset (in floats) where sphere data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// Compute layout from capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let lighting_offset = camera_offset + CAMERA_FLOATS;
        let instance_data_offset = lighting_offset + LIGHTING_FLOATS;
        let event_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_events,
            camera_offset,
            lighting_offset,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }
}
