use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;

/// Continuous self-rotation: `rotation.y = elapsed / divisor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub divisor: f32,
}

/// Fat scene node: a transform with optional components.
/// Pivots are nodes without a mesh.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Inactive nodes (and their subtrees) are not drawn.
    pub active: bool,
    /// Position relative to the parent.
    pub position: Vec3,
    /// Euler rotation (XYZ order, radians) relative to the parent.
    pub rotation: Vec3,
    /// Scale relative to the parent.
    pub scale: Vec3,
    /// Sphere mesh (pivots have none).
    pub mesh: Option<MeshComponent>,
    /// Self-rotation driven by the render loop.
    pub spin: Option<Spin>,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
            spin: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_spin(mut self, divisor: f32) -> Self {
        self.spin = Some(Spin { divisor });
        self
    }

    /// Local transform matrix (scale, then rotate, then translate).
    pub fn local_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}
