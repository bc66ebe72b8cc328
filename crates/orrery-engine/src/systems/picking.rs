use glam::{Vec2, Vec3};
use crate::api::types::NodeId;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::viewport::Viewport;

/// Distance along a unit-direction ray to the first hit on a sphere.
/// A ray starting inside the sphere hits at 0.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// World-space bounding sphere of a node's mesh.
pub fn bounding_sphere(scene: &SceneGraph, id: NodeId) -> Option<(Vec3, f32)> {
    let node = scene.get(id)?;
    let mesh = node.mesh?;
    let world = scene.world_matrix(id)?;
    let (scale, _, translation) = world.to_scale_rotation_translation();
    Some((translation, mesh.sphere.radius * scale.max_element()))
}

/// Index into `candidates` of the nearest sphere under the pointer.
/// Inactive nodes and nodes without a mesh never match.
pub fn pick_sphere(
    camera: &PerspectiveCamera,
    viewport: &Viewport,
    pointer_px: Vec2,
    scene: &SceneGraph,
    candidates: &[NodeId],
) -> Option<usize> {
    let ndc = PerspectiveCamera::pointer_to_ndc(viewport, pointer_px);
    let (origin, dir) = camera.ray(ndc);
    if dir == Vec3::ZERO {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (i, &id) in candidates.iter().enumerate() {
        if !scene.get(id).is_some_and(|n| n.active) {
            continue;
        }
        let Some((center, radius)) = bounding_sphere(scene, id) else { continue };
        if let Some(t) = ray_sphere(origin, dir, center, radius) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Material, MeshComponent};
    use crate::components::node::Node;
    use crate::renderer::camera::CameraPose;

    #[test]
    fn ray_hits_front_face() {
        let t = ray_sphere(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses() {
        assert!(ray_sphere(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0).is_none());
        // Sphere behind the origin
        assert!(ray_sphere(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, 2.0).is_none());
    }

    fn sphere_node(scene: &mut SceneGraph, position: Vec3, radius: f32) -> NodeId {
        let id = scene.next_id();
        scene.spawn(
            Node::new(id)
                .with_position(position)
                .with_mesh(MeshComponent::sphere(radius, Material::default())),
        )
    }

    #[test]
    fn picks_nearest_under_pointer() {
        let mut scene = SceneGraph::new();
        let far = sphere_node(&mut scene, Vec3::new(0.0, 0.0, -10.0), 3.0);
        let near = sphere_node(&mut scene, Vec3::ZERO, 1.0);
        let off = sphere_node(&mut scene, Vec3::new(30.0, 0.0, 0.0), 1.0);

        let mut camera = PerspectiveCamera::default();
        camera.set_pose(CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO));
        let viewport = Viewport::default();
        let centre = Vec2::new(400.0, 300.0);

        assert_eq!(pick_sphere(&camera, &viewport, centre, &scene, &[far, near, off]), Some(1));
        assert_eq!(pick_sphere(&camera, &viewport, centre, &scene, &[off]), None);

        scene.get_mut(near).unwrap().active = false;
        assert_eq!(pick_sphere(&camera, &viewport, centre, &scene, &[far, near]), Some(0));
    }
}
