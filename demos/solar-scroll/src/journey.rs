/// The scroll journey: three camera legs, one orbit sweep, four info panels.
///
/// | segment       | scroll      | camera                          | orbit              |
/// |---------------|-------------|---------------------------------|--------------------|
/// | approach-sun  | [0.0, 1.0)  | START → ORBIT_VIEW              | 0                  |
/// | orbit-planets | [1.0, 1.5)  | ORBIT_VIEW (pinned)             | k_i × fraction     |
/// | pan-outer     | [1.5, 2.5]  | ORBIT_VIEW → OUTER_VIEW         | k_i (held)         |
///
/// Scroll is measured in viewport heights. Segments partition the range
/// without overlap, so each camera leg starts where the previous one ends.

use glam::Vec3;
use orrery_engine::{CameraPose, CameraSegment, OrbitSegment, PanelSegment, Result, ScrollTimeline};

use crate::bodies::{ORBIT_MULTIPLIERS, PLANET_COUNT};

// ── Camera poses ─────────────────────────────────────────────────────

/// Initial view: just outside the sun's surface, looking at the origin.
pub const START: CameraPose = CameraPose::new(Vec3::new(5.0, 1.0, 5.0), Vec3::ZERO);
/// Raised view over the inner planets.
pub const ORBIT_VIEW: CameraPose = CameraPose::new(Vec3::new(3.0, 10.0, 9.0), Vec3::ZERO);
/// Wide view across the outer planets.
pub const OUTER_VIEW: CameraPose = CameraPose::new(Vec3::new(60.0, 40.0, 90.0), Vec3::new(55.0, 0.0, 0.0));

// ── Segment boundaries ───────────────────────────────────────────────

pub const APPROACH_END: f32 = 1.0;
pub const ORBIT_END: f32 = 1.5;
pub const JOURNEY_END: f32 = 2.5;

// ── Panels ───────────────────────────────────────────────────────────

pub const PANEL_INTRO: usize = 0;
pub const PANEL_SUN: usize = 1;
pub const PANEL_ORBITS: usize = 2;
pub const PANEL_OUTER: usize = 3;
pub const PANEL_COUNT: usize = 4;

pub fn timeline() -> Result<ScrollTimeline> {
    let mut t = ScrollTimeline::new(PLANET_COUNT, PANEL_COUNT);

    t.push_camera(CameraSegment::new("approach-sun", 0.0, APPROACH_END, START, ORBIT_VIEW)?);
    t.push_camera(CameraSegment::pinned("orbit-planets", APPROACH_END, ORBIT_END, ORBIT_VIEW)?);
    t.push_camera(CameraSegment::new("pan-outer", ORBIT_END, JOURNEY_END, ORBIT_VIEW, OUTER_VIEW)?);

    t.push_orbit(OrbitSegment::new("orbit-planets", APPROACH_END, ORBIT_END, ORBIT_MULTIPLIERS.to_vec())?)?;

    t.push_panel(PanelSegment::fade_out("intro", PANEL_INTRO, 0.0, 0.6, 0.2, 0.6)?)?;
    t.push_panel(PanelSegment::fade_in("sun", PANEL_SUN, 0.6, APPROACH_END, 0.6, 0.8)?)?;
    t.push_panel(PanelSegment::fade_in("orbits", PANEL_ORBITS, APPROACH_END, ORBIT_END, 1.0, 1.1)?)?;
    // Open-ended so the last panel stays up however tall the page is
    t.push_panel(PanelSegment::fade_in("outer", PANEL_OUTER, ORBIT_END, f32::MAX, 1.5, 1.8)?)?;

    Ok(t)
}
