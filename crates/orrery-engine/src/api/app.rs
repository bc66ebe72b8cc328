use serde::{Deserialize, Serialize};
use crate::api::types::UiEvent;
use crate::assets::registry::TextureRegistry;
use crate::components::light::LightState;
use crate::core::scene::SceneGraph;
use crate::core::time::FrameTime;
use crate::error::{OrreryError, Result};
use crate::input::sampler::InputSampler;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::viewport::Viewport;

/// Configuration for the engine, provided by the app.
/// Every field has a default, so a partial JSON override is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Ceiling on the device pixel ratio (default: 2).
    pub max_pixel_ratio: f32,
    /// Quiet period before a resize is applied, in seconds (default: 0.15).
    pub resize_debounce_secs: f32,
    /// Parallax easing rate per second (default: 5).
    pub parallax_rate: f32,
    /// Parallax offset at the viewport edge (default: 0.5).
    pub parallax_amplitude: f32,
    /// Cap on one frame's delta time, in seconds (default: 0.1).
    pub max_frame_delta: f32,
    /// Maximum sphere instances per frame (default: 32).
    pub max_instances: usize,
    /// Maximum UI events per frame (default: 32).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            max_pixel_ratio: 2.0,
            resize_debounce_secs: 0.15,
            parallax_rate: 5.0,
            parallax_amplitude: 0.5,
            max_frame_delta: 0.1,
            max_instances: 32,
            max_events: 32,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a partial JSON override on top of `self`.
    pub fn merged(&self, json: &str) -> Result<Self> {
        let mut value = serde_json::to_value(self)?;
        let patch: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(patch) = patch else {
            return Err(OrreryError::InvalidConfig("config override must be a JSON object".into()));
        };
        if let serde_json::Value::Object(base) = &mut value {
            base.extend(patch);
        }
        let config: AppConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(OrreryError::InvalidConfig(msg.to_string()));
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return fail("fov_y_degrees must be in (0, 180)");
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return fail("clip planes need 0 < near < far");
        }
        if !(self.max_pixel_ratio > 0.0) {
            return fail("max_pixel_ratio must be positive");
        }
        if !(self.resize_debounce_secs >= 0.0) {
            return fail("resize_debounce_secs must not be negative");
        }
        if !(self.parallax_rate >= 0.0) {
            return fail("parallax_rate must not be negative");
        }
        if !self.parallax_amplitude.is_finite() {
            return fail("parallax_amplitude must be finite");
        }
        if !(self.max_frame_delta > 0.0) {
            return fail("max_frame_delta must be positive");
        }
        if self.max_instances == 0 {
            return fail("max_instances must be at least 1");
        }
        Ok(())
    }
}

/// The contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Texture manifest JSON, parsed into `ctx.textures` before `init`.
    fn texture_manifest(&self) -> Option<&str> {
        None
    }

    /// Build the scene. Errors here are fatal.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<()>;

    /// Per-frame update. Apply scroll state, run picking, emit UI events.
    fn update(&mut self, ctx: &mut EngineContext, time: FrameTime, input: &InputSampler);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: SceneGraph,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    pub events: Vec<UiEvent>,
}

impl EngineContext {
    pub fn new(config: &AppConfig) -> Self {
        let viewport = Viewport {
            max_pixel_ratio: config.max_pixel_ratio,
            ..Viewport::default()
        };
        let camera = PerspectiveCamera::new(config.fov_y_degrees, viewport.aspect(), config.near, config.far);
        Self {
            scene: SceneGraph::new(),
            lights: LightState::new(),
            textures: TextureRegistry::new(),
            camera,
            viewport,
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Emit a UI event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Apply a settled viewport size: camera aspect follows.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.viewport.device_pixel_ratio = device_pixel_ratio;
        self.camera.resize(&self.viewport);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = AppConfig::default();
        assert_eq!(c.fov_y_degrees, 75.0);
        assert_eq!(c.far, 1000.0);
        assert_eq!(c.max_pixel_ratio, 2.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = AppConfig::from_json(r#"{ "far": 500.0 }"#).unwrap();
        assert_eq!(c.far, 500.0);
        assert_eq!(c.near, 0.1);
    }

    #[test]
    fn merged_keeps_base_values() {
        let base = AppConfig { max_instances: 9, ..Default::default() };
        let c = base.merged(r#"{ "parallax_rate": 2.0 }"#).unwrap();
        assert_eq!(c.max_instances, 9);
        assert_eq!(c.parallax_rate, 2.0);
        assert!(base.merged("[1, 2]").is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_json(r#"{ "near": 10.0, "far": 5.0 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "fov_y_degrees": 0.0 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "max_frame_delta": -1.0 }"#).is_err());
        assert!(matches!(AppConfig::from_json("not json"), Err(OrreryError::Json(_))));
    }

    #[test]
    fn context_resize_updates_aspect() {
        let mut ctx = EngineContext::default();
        ctx.resize(1000.0, 500.0, 3.0);
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(ctx.viewport.pixel_ratio(), 2.0);
    }
}
