//! Renderer contract.
//!
//! All GPU work happens in the host page (WebGPU, or WebGL2 as a fallback).
//! Rust produces a [`FrameData`] per tick and hands it to a [`Renderer`]; the
//! web bridge's implementation serializes it into the shared frame buffer.

use log::info;
use super::camera::CameraUniform;
use super::instance::SphereInstance;
use super::viewport::Viewport;
use crate::api::types::UiEvent;
use crate::assets::registry::TextureId;
use crate::components::light::LightingUniform;
use crate::error::{OrreryError, Result};

/// Rendering context tier the host will draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTier {
    /// WebGPU
    Gpu,
    /// WebGL2 fallback
    WebGl2,
}

impl RenderTier {
    /// Numeric code written to the frame header.
    pub fn code(self) -> f32 {
        match self {
            RenderTier::Gpu => 1.0,
            RenderTier::WebGl2 => 2.0,
        }
    }
}

/// What the host page reported it can create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub webgpu: bool,
    pub webgl2: bool,
}

impl Capabilities {
    pub fn new(webgpu: bool, webgl2: bool) -> Self {
        Self { webgpu, webgl2 }
    }

    /// Pick the best tier, or fail with a user-facing message.
    pub fn negotiate(self) -> Result<RenderTier> {
        let tier = if self.webgpu {
            RenderTier::Gpu
        } else if self.webgl2 {
            RenderTier::WebGl2
        } else {
            return Err(OrreryError::UnsupportedContext {
                reason: "neither WebGPU nor WebGL2 is available".into(),
            });
        };
        info!("render tier: {tier:?}");
        Ok(tier)
    }
}

/// Counts from one draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub spheres: u32,
    pub events: u32,
    /// Items that did not fit the output buffer.
    pub dropped: u32,
}

/// Renderer backend.
pub trait Renderer {
    /// Backend identifier (e.g., "host-buffer").
    fn backend(&self) -> &'static str;

    /// Tier chosen at init.
    fn tier(&self) -> RenderTier;

    /// Draw one complete frame. Called exactly once per tick.
    fn draw(&mut self, frame: &FrameData) -> DrawStats;

    /// Output surface changed size (physical pixels).
    fn resize(&mut self, width: u32, height: u32);
}

/// Everything the renderer needs for one frame.
pub struct FrameData<'a> {
    pub frame: u64,
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Normalized scroll offset.
    pub scroll: f32,
    pub viewport: Viewport,
    pub camera: CameraUniform,
    pub lighting: LightingUniform,
    pub spheres: &'a [SphereInstance],
    /// Spheres already dropped before reaching the renderer.
    pub spheres_dropped: u32,
    /// Star-field slot and whether it can be sampled yet.
    pub background: Option<(TextureId, bool)>,
    pub events: &'a [UiEvent],
}
