use crate::core::scene::SceneGraph;

/// Set `rotation.y = elapsed / divisor` on every spinning node.
/// Absolute, not incremental: the same `elapsed` always yields the same pose.
pub fn apply_spin(scene: &mut SceneGraph, elapsed: f32) {
    for node in scene.iter_mut() {
        if let Some(spin) = node.spin {
            if spin.divisor != 0.0 {
                node.rotation.y = elapsed / spin.divisor;
            }
        }
    }
}
