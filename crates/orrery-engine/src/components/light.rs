/// Scene lighting: one ambient term plus an optional point light.
///
/// Lights are persistent. The scene builder sets them once and the render
/// loop serializes them every frame for the host's shading pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::mesh::Rgb;

/// Uniform light reaching every surface equally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    /// White at intensity 1: textures show unshaded.
    fn default() -> Self {
        Self { color: Rgb::WHITE, intensity: 1.0 }
    }
}

/// Omnidirectional light at a world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self { position, intensity }
    }
}

/// Wire format (8 floats / 32 bytes):
/// `[ambient_r, ambient_g, ambient_b, ambient_intensity, point_x, point_y, point_z, point_intensity]`
///
/// A zero point intensity means "no point light".
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LightingUniform {
    pub ambient: [f32; 4],
    pub point: [f32; 4],
}

impl LightingUniform {
    pub const FLOATS: usize = 8;
}

/// Active lights for the scene.
#[derive(Debug, Clone, Default)]
pub struct LightState {
    ambient: AmbientLight,
    point: Option<PointLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ambient(&mut self, color: Rgb, intensity: f32) {
        self.ambient = AmbientLight { color, intensity };
    }

    pub fn ambient(&self) -> AmbientLight {
        self.ambient
    }

    pub fn set_point(&mut self, light: PointLight) {
        self.point = Some(light);
    }

    pub fn point(&self) -> Option<PointLight> {
        self.point
    }

    pub fn clear_point(&mut self) {
        self.point = None;
    }

    pub fn uniform(&self) -> LightingUniform {
        let a = self.ambient;
        let point = match self.point {
            Some(p) => [p.position.x, p.position.y, p.position.z, p.intensity],
            None => [0.0; 4],
        };
        LightingUniform {
            ambient: [a.color.r, a.color.g, a.color.b, a.intensity],
            point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_8_floats() {
        assert_eq!(std::mem::size_of::<LightingUniform>(), LightingUniform::FLOATS * 4);
    }

    #[test]
    fn default_ambient_is_white_unit() {
        let state = LightState::new();
        assert_eq!(state.uniform().ambient, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(state.uniform().point, [0.0; 4]);
    }

    #[test]
    fn point_light_serializes() {
        let mut state = LightState::new();
        state.set_point(PointLight::new(Vec3::new(-46.4, 0.0, 0.0), 2.0));
        assert_eq!(state.uniform().point, [-46.4, 0.0, 0.0, 2.0]);
        state.clear_point();
        assert!(state.point().is_none());
    }
}
