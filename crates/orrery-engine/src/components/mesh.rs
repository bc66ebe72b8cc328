use crate::assets::registry::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Self { r: c[0], g: c[1], b: c[2] }
    }
}

/// UV sphere geometry. The host tessellates; Rust only carries the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereMesh {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereMesh {
    pub fn new(radius: f32) -> Self {
        Self { radius, width_segments: 32, height_segments: 32 }
    }
}

/// Surface appearance. A missing or unloaded texture renders as `fallback`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture: Option<TextureId>,
    pub fallback: Rgb,
    /// Self-illumination (the sun ignores scene lighting).
    pub emissive: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self { texture: None, fallback: Rgb::default(), emissive: 0.0 }
    }
}

impl Material {
    pub fn textured(texture: Option<TextureId>, fallback: Rgb) -> Self {
        Self { texture, fallback, ..Default::default() }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

/// A textured sphere attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub sphere: SphereMesh,
    pub material: Material,
}

impl MeshComponent {
    pub fn sphere(radius: f32, material: Material) -> Self {
        Self { sphere: SphereMesh::new(radius), material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_white() {
        assert_eq!(Rgb::from_hex(0xffffff), Rgb::WHITE);
    }

    #[test]
    fn hex_channels() {
        let c = Rgb::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn sphere_defaults_to_32_segments() {
        let mesh = MeshComponent::sphere(2.0, Material::default());
        assert_eq!(mesh.sphere.width_segments, 32);
        assert_eq!(mesh.sphere.height_segments, 32);
    }
}
