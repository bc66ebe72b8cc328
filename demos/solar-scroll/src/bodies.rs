/// Body table: sun and eight planets, sized and spaced from astronomical constants.
///
/// Radii are scaled down by `DIVIDE_RADIUS_BY`; distances are scaled down by a
/// further `DISTANCE_DIVISOR` so the outer planets fit in one scroll journey.
/// The sun sits at `-radius` on the x axis, so its surface touches the origin
/// and every planet's orbit pivot.

use orrery_engine::Rgb;

/// Planet index constants (index into `PLANETS`).
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

pub const DIVIDE_RADIUS_BY: f32 = 15000.0;
pub const DISTANCE_DIVISOR: f32 = 3000.0;

/// Static description of one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    pub name: &'static str,
    /// Texture manifest name.
    pub texture: &'static str,
    pub radius_km: f32,
    /// Mean distance from the sun; zero for the sun itself.
    pub distance_km: f32,
    /// Flat color until the texture is ready.
    pub fallback: Rgb,
    /// Seconds of elapsed time per radian of self-rotation.
    pub spin_divisor: f32,
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN: BodyDesc = BodyDesc {
    name: "Sun",
    texture: "sun",
    radius_km: 696_350.0,
    distance_km: 0.0,
    fallback: Rgb::new(1.0, 0.9, 0.5),
    spin_divisor: 40.0,
};

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANETS: [BodyDesc; PLANET_COUNT] = [
    BodyDesc { name: "Mercury", texture: "mercury", radius_km: 2_439.7,  distance_km: 57.91e6,  fallback: Rgb::new(0.60, 0.55, 0.50), spin_divisor: 6.0 },
    BodyDesc { name: "Venus",   texture: "venus",   radius_km: 6_052.0,  distance_km: 108.2e6,  fallback: Rgb::new(0.90, 0.75, 0.40), spin_divisor: 8.0 },
    BodyDesc { name: "Earth",   texture: "earth",   radius_km: 6_371.0,  distance_km: 149.6e6,  fallback: Rgb::new(0.20, 0.40, 0.80), spin_divisor: 2.0 },
    BodyDesc { name: "Mars",    texture: "mars",    radius_km: 3_389.5,  distance_km: 227.9e6,  fallback: Rgb::new(0.80, 0.30, 0.15), spin_divisor: 2.1 },
    BodyDesc { name: "Jupiter", texture: "jupiter", radius_km: 69_910.0, distance_km: 778.5e6,  fallback: Rgb::new(0.80, 0.70, 0.50), spin_divisor: 1.0 },
    BodyDesc { name: "Saturn",  texture: "saturn",  radius_km: 58_230.0, distance_km: 1_434e6,  fallback: Rgb::new(0.85, 0.75, 0.50), spin_divisor: 1.1 },
    BodyDesc { name: "Uranus",  texture: "uranus",  radius_km: 25_362.0, distance_km: 2_871e6,  fallback: Rgb::new(0.50, 0.75, 0.85), spin_divisor: 1.5 },
    BodyDesc { name: "Neptune", texture: "neptune", radius_km: 24_622.0, distance_km: 4_495e6,  fallback: Rgb::new(0.25, 0.35, 0.80), spin_divisor: 1.4 },
];

/// Orbital angle gained across the orbit segment, in radians.
/// Inner planets sweep further, a loose nod to their shorter years.
pub const ORBIT_MULTIPLIERS: [f32; PLANET_COUNT] = [8.0, 6.0, 5.0, 4.0, 2.0, 1.5, 1.0, 0.75];

/// A body with its scene-space size and placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub texture: &'static str,
    pub radius: f32,
    /// Offset along x: from the origin for planets, `-radius` for the sun.
    pub distance: f32,
}

impl BodyDesc {
    pub fn radius(&self) -> f32 {
        self.radius_km / DIVIDE_RADIUS_BY
    }

    pub fn distance(&self) -> f32 {
        self.distance_km / DIVIDE_RADIUS_BY / DISTANCE_DIVISOR
    }
}

pub fn sun() -> CelestialBody {
    let radius = SUN.radius();
    CelestialBody { name: SUN.name, texture: SUN.texture, radius, distance: -radius }
}

pub fn planets() -> [CelestialBody; PLANET_COUNT] {
    PLANETS.map(|p| CelestialBody {
        name: p.name,
        texture: p.texture,
        radius: p.radius(),
        distance: p.distance(),
    })
}
