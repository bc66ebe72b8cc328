/// Scene builder: sun, one orbit pivot per planet, and lights.
///
/// Hierarchy:
/// ```text
/// root
/// ├── sun          (x = -sun.radius)
/// ├── mercury-pivot (origin)
/// │   └── mercury  (x = distance)
/// └── ...
/// ```
/// Only a pivot's y rotation changes after setup; it carries the planet around.

use glam::Vec3;
use orrery_engine::{EngineContext, MeshComponent, Node, NodeId, PointLight, Result, Rgb};

use crate::bodies::{self, PLANETS, PLANET_COUNT, SUN};

/// Handles into the built scene.
#[derive(Debug, Clone)]
pub struct SolarScene {
    pub sun: NodeId,
    pub pivots: [NodeId; PLANET_COUNT],
    pub planets: [NodeId; PLANET_COUNT],
    /// Sun first, then planets in table order. Index = body index in UI events.
    pub bodies: Vec<NodeId>,
}

impl SolarScene {
    /// Display name for a body index (as used by hover events).
    pub fn body_name(index: usize) -> Option<&'static str> {
        match index {
            0 => Some(SUN.name),
            i => PLANETS.get(i - 1).map(|p| p.name),
        }
    }
}

pub fn build(ctx: &mut EngineContext) -> Result<SolarScene> {
    ctx.lights.set_ambient(Rgb::from_hex(0xffffff), 1.0);

    let sun_body = bodies::sun();
    let sun_center = Vec3::new(sun_body.distance, 0.0, 0.0);
    ctx.lights.set_point(PointLight::new(sun_center, 1.5));

    let material = ctx.textures.material(SUN.texture, SUN.fallback).with_emissive(1.0);
    let id = ctx.scene.next_id();
    let sun = ctx.scene.spawn(
        Node::new(id)
            .with_tag("sun")
            .with_position(sun_center)
            .with_mesh(MeshComponent::sphere(sun_body.radius, material))
            .with_spin(SUN.spin_divisor),
    );

    let mut pivots = [NodeId(0); PLANET_COUNT];
    let mut planets = [NodeId(0); PLANET_COUNT];
    for (i, (desc, body)) in PLANETS.iter().zip(bodies::planets()).enumerate() {
        let id = ctx.scene.next_id();
        let pivot = ctx.scene.spawn(Node::new(id).with_tag(format!("{}-pivot", desc.texture)));

        let material = ctx.textures.material(desc.texture, desc.fallback);
        let id = ctx.scene.next_id();
        let planet = ctx.scene.spawn_child(
            pivot,
            Node::new(id)
                .with_tag(desc.texture)
                .with_position(Vec3::new(body.distance, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(body.radius, material))
                .with_spin(desc.spin_divisor),
        )?;

        pivots[i] = pivot;
        planets[i] = planet;
    }

    let mut all = Vec::with_capacity(PLANET_COUNT + 1);
    all.push(sun);
    all.extend_from_slice(&planets);

    Ok(SolarScene { sun, pivots, planets, bodies: all })
}

/// Set each pivot's y rotation. Missing angles leave the pivot unchanged.
pub fn set_orbit_angles(ctx: &mut EngineContext, scene: &SolarScene, angles: &[f32]) {
    for (&pivot, &angle) in scene.pivots.iter().zip(angles) {
        if let Some(node) = ctx.scene.get_mut(pivot) {
            node.rotation.y = angle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{TextureManifest, TextureRegistry};
    use crate::bodies::EARTH;

    fn context() -> EngineContext {
        let mut ctx = EngineContext::default();
        let manifest = TextureManifest::from_json(crate::app::TEXTURE_MANIFEST).unwrap();
        ctx.textures = TextureRegistry::from_manifest(&manifest);
        ctx
    }

    #[test]
    fn builds_sun_and_eight_pivoted_planets() {
        let mut ctx = context();
        let scene = build(&mut ctx).unwrap();
        // sun + 8 pivots + 8 planets
        assert_eq!(ctx.scene.len(), 17);
        assert_eq!(scene.bodies.len(), 9);
        for (pivot, planet) in scene.pivots.iter().zip(&scene.planets) {
            assert_eq!(ctx.scene.parent(*planet), Some(*pivot));
            assert!(ctx.scene.get(*pivot).unwrap().mesh.is_none());
        }
        assert_eq!(ctx.scene.parent(scene.sun), None);
    }

    #[test]
    fn neptune_is_in_the_scene() {
        let mut ctx = context();
        build(&mut ctx).unwrap();
        let neptune = ctx.scene.find_by_tag("neptune").unwrap();
        assert!(neptune.mesh.unwrap().material.texture.is_some());
    }

    #[test]
    fn sun_surface_touches_origin() {
        let mut ctx = context();
        let scene = build(&mut ctx).unwrap();
        let sun = ctx.scene.get(scene.sun).unwrap();
        let radius = sun.mesh.unwrap().sphere.radius;
        assert!((sun.position.x + radius).abs() < 1e-5);
        assert_eq!(sun.mesh.unwrap().material.emissive, 1.0);
    }

    #[test]
    fn pivots_carry_planets_around_origin() {
        let mut ctx = context();
        let scene = build(&mut ctx).unwrap();
        let mut angles = [0.0; PLANET_COUNT];
        angles[EARTH] = std::f32::consts::PI;
        set_orbit_angles(&mut ctx, &scene, &angles);

        let earth = ctx.scene.world_matrix(scene.planets[EARTH]).unwrap().transform_point3(Vec3::ZERO);
        let distance = bodies::planets()[EARTH].distance;
        assert!((earth.x + distance).abs() < 1e-4);
        assert!((earth.length() - distance).abs() < 1e-4);
    }

    #[test]
    fn missing_textures_fall_back_to_flat_color() {
        let mut ctx = EngineContext::default();
        let scene = build(&mut ctx).unwrap();
        let sun = ctx.scene.get(scene.sun).unwrap().mesh.unwrap();
        assert_eq!(sun.material.texture, None);
        assert_eq!(sun.material.fallback, SUN.fallback);
    }

    #[test]
    fn body_names() {
        assert_eq!(SolarScene::body_name(0), Some("Sun"));
        assert_eq!(SolarScene::body_name(3), Some("Earth"));
        assert_eq!(SolarScene::body_name(9), None);
    }
}
