/// Solar Scroll: scroll-driven tour of the solar system.
///
/// Scroll drives the camera path, the planets' orbital sweep and the info
/// panels. The pointer drives parallax (in the runner) and hover picking.

use log::debug;
use orrery_engine::systems::picking::pick_sphere;
use orrery_engine::{
    App, EngineContext, FrameTime, InputSampler, Result, ScrollState, ScrollTimeline, UiEvent,
};

use crate::journey::{self, PANEL_COUNT, START};
use crate::system::{self, SolarScene};

pub const TEXTURE_MANIFEST: &str = include_str!("../assets/textures.json");

/// Smallest opacity change worth reporting to the page.
const OPACITY_EPSILON: f32 = 1e-3;

pub struct SolarScroll {
    scene: Option<SolarScene>,
    timeline: Option<ScrollTimeline>,
    camera_segment: Option<usize>,
    /// Last opacity sent per panel; `None` until the first report.
    panel_opacity: [Option<f32>; PANEL_COUNT],
    hovered: Option<usize>,
}

impl SolarScroll {
    pub fn new() -> Self {
        Self {
            scene: None,
            timeline: None,
            camera_segment: None,
            panel_opacity: [None; PANEL_COUNT],
            hovered: None,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn apply_scroll(&mut self, ctx: &mut EngineContext, state: ScrollState) {
        if let Some(pose) = state.camera {
            ctx.camera.set_pose(pose);
        }
        if state.camera_segment != self.camera_segment {
            if let (Some(i), Some(timeline)) = (state.camera_segment, &self.timeline) {
                debug!("scroll {:.3}: entered '{}'", state.scroll, timeline.camera_segments()[i].name);
            }
            self.camera_segment = state.camera_segment;
        }

        if let Some(scene) = &self.scene {
            system::set_orbit_angles(ctx, scene, &state.orbit_angles);
        }

        for (panel, &opacity) in state.panel_opacity.iter().enumerate() {
            // Always land exactly on 0 and 1 so panels never stick half-faded
            let changed = match self.panel_opacity[panel] {
                None => true,
                Some(prev) if prev == opacity => false,
                Some(prev) => (prev - opacity).abs() > OPACITY_EPSILON || opacity == 0.0 || opacity == 1.0,
            };
            if changed {
                self.panel_opacity[panel] = Some(opacity);
                ctx.emit_event(UiEvent::panel_opacity(panel, opacity));
            }
        }
    }

    fn update_hover(&mut self, ctx: &mut EngineContext, input: &InputSampler) {
        let Some(scene) = &self.scene else { return };
        let hovered = input
            .pointer_px()
            .and_then(|p| pick_sphere(&ctx.camera, &ctx.viewport, p, &ctx.scene, &scene.bodies));
        if hovered != self.hovered {
            debug!("hover: {:?}", hovered.and_then(SolarScene::body_name));
            self.hovered = hovered;
            ctx.emit_event(UiEvent::hover(hovered));
        }
    }
}

impl Default for SolarScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarScroll {
    fn texture_manifest(&self) -> Option<&str> {
        Some(TEXTURE_MANIFEST)
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<()> {
        self.timeline = Some(journey::timeline()?);
        self.scene = Some(system::build(ctx)?);
        ctx.camera.set_pose(START);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, _time: FrameTime, input: &InputSampler) {
        if input.scroll_changed() {
            if let Some(state) = self.timeline.as_ref().map(|t| t.evaluate(input.scroll())) {
                self.apply_scroll(ctx, state);
            }
        }
        self.update_hover(ctx, input);
    }
}
