//! Scroll-to-state mapping.
//!
//! A [`ScrollTimeline`] holds three ordered tracks of named segments: camera
//! poses, per-body orbital angles and UI panel opacity. Evaluating the timeline
//! at a normalized scroll offset yields a complete [`ScrollState`].
//!
//! Resolution rules, per track:
//! - the last declared segment whose span contains the offset wins;
//! - camera and orbit tracks clamp to the nearest segment boundary when no
//!   segment contains the offset (before the first, past the last, or in a gap);
//! - a panel outside all of its segments is hidden (opacity 0).

use log::warn;
use crate::error::{OrreryError, Result};
use crate::extensions::easing::{inverse_lerp_clamped, lerp, Easing};
use crate::renderer::camera::CameraPose;
use crate::scroll::span::ScrollSpan;

/// Camera moves from `from` to `to` across the span. Equal poses pin the camera.
#[derive(Debug, Clone)]
pub struct CameraSegment {
    pub name: String,
    pub span: ScrollSpan,
    pub from: CameraPose,
    pub to: CameraPose,
    pub easing: Easing,
}

impl CameraSegment {
    pub fn new(name: impl Into<String>, start: f32, end: f32, from: CameraPose, to: CameraPose) -> Result<Self> {
        let name = name.into();
        let span = ScrollSpan::new(&name, start, end)?;
        Ok(Self { name, span, from, to, easing: Easing::Linear })
    }

    /// A segment that holds one pose for its whole span.
    pub fn pinned(name: impl Into<String>, start: f32, end: f32, pose: CameraPose) -> Result<Self> {
        Self::new(name, start, end, pose, pose)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn pose_at(&self, fraction: f32) -> CameraPose {
        self.from.ease(self.to, fraction, self.easing)
    }
}

/// Each body revolves by `multipliers[i] × fraction` radians across the span.
#[derive(Debug, Clone)]
pub struct OrbitSegment {
    pub name: String,
    pub span: ScrollSpan,
    pub multipliers: Vec<f32>,
}

impl OrbitSegment {
    pub fn new(name: impl Into<String>, start: f32, end: f32, multipliers: Vec<f32>) -> Result<Self> {
        let name = name.into();
        let span = ScrollSpan::new(&name, start, end)?;
        Ok(Self { name, span, multipliers })
    }
}

/// Panel opacity ramps linearly from `from` to `to` over `ramp`, held at the
/// ramp's ends elsewhere in `span`, and is hidden outside `span`.
#[derive(Debug, Clone)]
pub struct PanelSegment {
    pub name: String,
    pub panel: usize,
    pub span: ScrollSpan,
    pub ramp: ScrollSpan,
    pub from: f32,
    pub to: f32,
}

impl PanelSegment {
    /// Fade in over `[ramp_start, ramp_end)`, stay visible until `end`.
    pub fn fade_in(name: impl Into<String>, panel: usize, start: f32, end: f32, ramp_start: f32, ramp_end: f32) -> Result<Self> {
        Self::new(name, panel, (start, end), (ramp_start, ramp_end), 0.0, 1.0)
    }

    /// Visible from `start`, fade out over `[ramp_start, ramp_end)`.
    pub fn fade_out(name: impl Into<String>, panel: usize, start: f32, end: f32, ramp_start: f32, ramp_end: f32) -> Result<Self> {
        Self::new(name, panel, (start, end), (ramp_start, ramp_end), 1.0, 0.0)
    }

    pub fn new(
        name: impl Into<String>,
        panel: usize,
        span: (f32, f32),
        ramp: (f32, f32),
        from: f32,
        to: f32,
    ) -> Result<Self> {
        let name = name.into();
        let span = ScrollSpan::new(&name, span.0, span.1)?;
        let ramp = ScrollSpan::new(&name, ramp.0, ramp.1)?;
        if !(0.0..=1.0).contains(&from) || !(0.0..=1.0).contains(&to) {
            return Err(OrreryError::InvalidConfig(format!("panel segment '{name}': opacity outside [0, 1]")));
        }
        Ok(Self { name, panel, span, ramp, from, to })
    }

    pub fn opacity_at(&self, s: f32) -> f32 {
        lerp(self.from, self.to, inverse_lerp_clamped(self.ramp.start, self.ramp.end, s))
    }
}

trait Segment {
    fn name(&self) -> &str;
    fn span(&self) -> ScrollSpan;
}

impl Segment for CameraSegment {
    fn name(&self) -> &str {
        &self.name
    }
    fn span(&self) -> ScrollSpan {
        self.span
    }
}

impl Segment for OrbitSegment {
    fn name(&self) -> &str {
        &self.name
    }
    fn span(&self) -> ScrollSpan {
        self.span
    }
}

impl Segment for PanelSegment {
    fn name(&self) -> &str {
        &self.name
    }
    fn span(&self) -> ScrollSpan {
        self.span
    }
}

/// Pick the segment for `s` and the fraction to evaluate it at.
/// Last containing segment wins; otherwise clamp to the nearest boundary
/// (ties go to the later segment).
fn resolve<S: Segment>(segments: &[S], s: f32) -> Option<(usize, f32)> {
    if let Some(i) = segments.iter().rposition(|seg| seg.span().contains(s)) {
        return Some((i, segments[i].span().fraction(s)));
    }

    let mut best: Option<(usize, f32, f32)> = None;
    for (i, seg) in segments.iter().enumerate() {
        let span = seg.span();
        for (boundary, fraction) in [(span.start, 0.0), (span.end, 1.0)] {
            let dist = (s - boundary).abs();
            match best {
                Some((_, _, d)) if dist > d => {}
                _ => best = Some((i, fraction, dist)),
            }
        }
    }
    best.map(|(i, fraction, _)| (i, fraction))
}

fn overlapping_pairs<S: Segment>(segments: &[S]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for b in &segments[i + 1..] {
            if a.span().overlaps(&b.span()) {
                pairs.push((a.name().to_string(), b.name().to_string()));
            }
        }
    }
    pairs
}

/// Everything the scroll offset determines, for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    /// The offset this state was evaluated at.
    pub scroll: f32,
    /// Camera pose, or `None` when the camera track is empty.
    pub camera: Option<CameraPose>,
    /// Index of the camera segment that produced `camera`.
    pub camera_segment: Option<usize>,
    /// Orbital angle per body, in radians.
    pub orbit_angles: Vec<f32>,
    /// Opacity per panel.
    pub panel_opacity: Vec<f32>,
}

/// Ordered, named scroll segments for camera, orbit and panels.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    body_count: usize,
    panel_count: usize,
    camera: Vec<CameraSegment>,
    orbit: Vec<OrbitSegment>,
    panels: Vec<PanelSegment>,
}

impl ScrollTimeline {
    pub fn new(body_count: usize, panel_count: usize) -> Self {
        Self {
            body_count,
            panel_count,
            camera: Vec::new(),
            orbit: Vec::new(),
            panels: Vec::new(),
        }
    }

    /// Append a camera segment. Later segments take priority where spans overlap.
    pub fn push_camera(&mut self, segment: CameraSegment) -> &mut Self {
        warn_overlap("camera", &self.camera, &segment);
        self.camera.push(segment);
        self
    }

    /// Append an orbit segment. Its multiplier count must match the body count.
    pub fn push_orbit(&mut self, segment: OrbitSegment) -> Result<&mut Self> {
        if segment.multipliers.len() != self.body_count {
            return Err(OrreryError::InvalidConfig(format!(
                "orbit segment '{}' has {} multipliers, expected {}",
                segment.name,
                segment.multipliers.len(),
                self.body_count
            )));
        }
        warn_overlap("orbit", &self.orbit, &segment);
        self.orbit.push(segment);
        Ok(self)
    }

    /// Append a panel segment. Overlap is only checked against the same panel.
    pub fn push_panel(&mut self, segment: PanelSegment) -> Result<&mut Self> {
        if segment.panel >= self.panel_count {
            return Err(OrreryError::InvalidConfig(format!(
                "panel segment '{}' targets panel {} of {}",
                segment.name, segment.panel, self.panel_count
            )));
        }
        let same_panel: Vec<&PanelSegment> = self.panels.iter().filter(|p| p.panel == segment.panel).collect();
        for existing in same_panel {
            if existing.span.overlaps(&segment.span) {
                warn!("panel segments '{}' and '{}' overlap; '{}' wins", existing.name, segment.name, segment.name);
            }
        }
        self.panels.push(segment);
        Ok(self)
    }

    pub fn camera_segments(&self) -> &[CameraSegment] {
        &self.camera
    }

    pub fn orbit_segments(&self) -> &[OrbitSegment] {
        &self.orbit
    }

    pub fn body_count(&self) -> usize {
        self.body_count
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Name pairs of overlapping segments on the camera and orbit tracks.
    pub fn overlaps(&self) -> Vec<(String, String)> {
        let mut pairs = overlapping_pairs(&self.camera);
        pairs.extend(overlapping_pairs(&self.orbit));
        pairs
    }

    /// Evaluate the camera track alone.
    pub fn camera_at(&self, s: f32) -> Option<(usize, CameraPose)> {
        resolve(&self.camera, s).map(|(i, fraction)| (i, self.camera[i].pose_at(fraction)))
    }

    /// Evaluate the orbit track alone: one angle per body.
    pub fn orbit_angles_at(&self, s: f32) -> Vec<f32> {
        match resolve(&self.orbit, s) {
            Some((i, fraction)) => self.orbit[i].multipliers.iter().map(|k| k * fraction).collect(),
            None => vec![0.0; self.body_count],
        }
    }

    /// Evaluate the panel track alone: one opacity per panel.
    pub fn panel_opacity_at(&self, s: f32) -> Vec<f32> {
        let mut opacity = vec![0.0; self.panel_count];
        let mut decided = vec![false; self.panel_count];
        for seg in self.panels.iter().rev() {
            if !decided[seg.panel] && seg.span.contains(s) {
                opacity[seg.panel] = seg.opacity_at(s);
                decided[seg.panel] = true;
            }
        }
        opacity
    }

    /// Evaluate every track at normalized scroll offset `s`.
    pub fn evaluate(&self, s: f32) -> ScrollState {
        let camera = self.camera_at(s);
        ScrollState {
            scroll: s,
            camera: camera.map(|(_, pose)| pose),
            camera_segment: camera.map(|(i, _)| i),
            orbit_angles: self.orbit_angles_at(s),
            panel_opacity: self.panel_opacity_at(s),
        }
    }
}

fn warn_overlap<S: Segment>(track: &str, existing: &[S], new: &S) {
    for seg in existing {
        if seg.span().overlaps(&new.span()) {
            warn!("{track} segments '{}' and '{}' overlap; '{}' wins", seg.name(), new.name(), new.name());
        }
    }
}
