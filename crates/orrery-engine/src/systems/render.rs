use crate::assets::registry::TextureRegistry;
use crate::core::scene::SceneGraph;
use crate::renderer::instance::{SphereBuffer, SphereInstance};

/// Build the sphere buffer from every active mesh node in the scene.
/// Instances appear in scene traversal order (roots first, then children).
pub fn build_sphere_buffer(scene: &SceneGraph, textures: &TextureRegistry, buffer: &mut SphereBuffer) {
    buffer.clear();

    for (id, world) in scene.world_matrices() {
        let Some(mesh) = scene.get(id).and_then(|n| n.mesh) else { continue };

        let (scale, rotation, translation) = world.to_scale_rotation_translation();
        let material = mesh.material;
        let (slot, ready) = match material.texture {
            Some(tex) => (tex.0 as f32, if textures.is_ready(tex) { 1.0 } else { 0.0 }),
            None => (-1.0, 0.0),
        };

        buffer.push(SphereInstance {
            position: translation.to_array(),
            radius: mesh.sphere.radius * scale.max_element(),
            rotation: rotation.to_array(),
            texture_slot: slot,
            texture_ready: ready,
            fallback: material.fallback.to_array(),
            emissive: material.emissive,
            segments: mesh.sphere.width_segments as f32,
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::components::mesh::{Material, MeshComponent, Rgb};
    use crate::components::node::Node;

    #[test]
    fn child_instance_uses_world_position() {
        let mut textures = TextureRegistry::new();
        let tex = textures.register("earth", "earth.jpg", Rgb::new(0.1, 0.2, 0.9));

        let mut scene = SceneGraph::new();
        let id = scene.next_id();
        let pivot = scene.spawn(Node::new(id).with_rotation(Vec3::new(0.0, std::f32::consts::PI, 0.0)));
        let id = scene.next_id();
        let material = Material::textured(Some(tex), Rgb::new(0.1, 0.2, 0.9));
        scene
            .spawn_child(
                pivot,
                Node::new(id)
                    .with_position(Vec3::new(10.0, 0.0, 0.0))
                    .with_mesh(MeshComponent::sphere(0.5, material)),
            )
            .unwrap();

        let mut buffer = SphereBuffer::new(8);
        build_sphere_buffer(&scene, &textures, &mut buffer);

        // The pivot has no mesh, so only the planet is drawn
        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.instances[0];
        assert!((inst.position[0] + 10.0).abs() < 1e-4);
        assert!((inst.radius - 0.5).abs() < 1e-6);
        assert_eq!(inst.texture_slot, 0.0);
        assert_eq!(inst.texture_ready, 0.0);
        assert_eq!(inst.fallback, [0.1, 0.2, 0.9]);

        textures.mark_loaded(tex);
        build_sphere_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instances[0].texture_ready, 1.0);
    }

    #[test]
    fn untextured_mesh_has_no_slot() {
        let textures = TextureRegistry::new();
        let mut scene = SceneGraph::new();
        let id = scene.next_id();
        scene.spawn(Node::new(id).with_mesh(MeshComponent::sphere(1.0, Material::default())));

        let mut buffer = SphereBuffer::new(8);
        build_sphere_buffer(&scene, &textures, &mut buffer);
        assert_eq!(buffer.instances[0].texture_slot, -1.0);
    }
}
