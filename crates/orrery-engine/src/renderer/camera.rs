use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use crate::extensions::easing::{lerp_vec3, Easing};
use crate::renderer::viewport::Viewport;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolate position and target independently.
    pub fn lerp(self, to: CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: lerp_vec3(self.position, to.position, t),
            target: lerp_vec3(self.target, to.target, t),
        }
    }

    /// Interpolate with easing applied to `t`.
    pub fn ease(self, to: CameraPose, t: f32, easing: Easing) -> CameraPose {
        self.lerp(to, easing.apply(t))
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// World-space eye position (w = 1).
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

/// Perspective camera mounted in a movable group.
///
/// The scroll timeline sets `pose`; parallax moves `group_offset`. The group
/// translates eye and target together, so parallax never changes orientation.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub pose: CameraPose,
    /// Translation of the camera group (parallax).
    pub group_offset: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            pose: CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
            group_offset: Vec3::ZERO,
        }
    }

    /// Match the aspect ratio to the viewport.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// World-space eye position, including the group offset.
    pub fn eye(&self) -> Vec3 {
        self.pose.position + self.group_offset
    }

    /// World-space look-at point, including the group offset.
    pub fn look_target(&self) -> Vec3 {
        self.pose.target + self.group_offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        let forward = self.look_target() - eye;
        if forward.length_squared() < 1e-12 {
            return Mat4::from_translation(-eye);
        }
        // Looking straight up or down: Y is no longer a usable up vector
        let up = if forward.normalize().cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(eye, self.look_target(), up)
    }

    /// Right-handed projection with a [0, 1] depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.eye().extend(1.0).to_array(),
        }
    }

    /// Project a world point to normalized device coordinates.
    /// Returns `None` for points behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.xy() / clip.w)
    }

    /// World-space ray through a point in normalized device coordinates.
    /// Returns (origin, unit direction).
    pub fn ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        (near, (far - near).normalize_or_zero())
    }

    /// Convert a pointer position in CSS pixels to normalized device coordinates.
    pub fn pointer_to_ndc(viewport: &Viewport, pointer_px: Vec2) -> Vec2 {
        Vec2::new(
            pointer_px.x / viewport.width * 2.0 - 1.0,
            1.0 - pointer_px.y / viewport.height * 2.0,
        )
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 800.0 / 600.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_lerp_midpoint() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(mid.target, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn resize_sets_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.resize(&Viewport::new(1920.0, 1080.0, 1.0, 2.0));
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn target_projects_to_centre() {
        let mut cam = PerspectiveCamera::default();
        cam.set_pose(CameraPose::new(Vec3::new(5.0, 1.0, 5.0), Vec3::ZERO));
        let ndc = cam.project(Vec3::ZERO).unwrap();
        assert!(ndc.length() < 1e-4, "ndc = {ndc:?}");
    }

    #[test]
    fn point_behind_camera_is_not_projected() {
        let mut cam = PerspectiveCamera::default();
        cam.set_pose(CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        assert!(cam.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn group_offset_translates_eye_and_target() {
        let mut cam = PerspectiveCamera::default();
        cam.set_pose(CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        cam.group_offset = Vec3::new(1.0, 0.5, 0.0);
        assert_eq!(cam.eye(), Vec3::new(1.0, 0.5, 5.0));
        assert_eq!(cam.look_target(), Vec3::new(1.0, 0.5, 0.0));
        // Orientation unchanged: the shifted target still lands in the centre
        let ndc = cam.project(Vec3::new(1.0, 0.5, 0.0)).unwrap();
        assert!(ndc.length() < 1e-4);
    }

    #[test]
    fn centre_ray_points_at_target() {
        let mut cam = PerspectiveCamera::default();
        cam.set_pose(CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
        let (origin, dir) = cam.ray(Vec2::ZERO);
        assert!((dir - Vec3::NEG_Z).length() < 1e-3, "dir = {dir:?}");
        assert!((origin.z - (5.0 - cam.near)).abs() < 1e-3);
    }

    #[test]
    fn looking_straight_down_is_finite() {
        let mut cam = PerspectiveCamera::default();
        cam.set_pose(CameraPose::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO));
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn pointer_centre_is_ndc_origin() {
        let vp = Viewport::new(800.0, 600.0, 1.0, 2.0);
        let ndc = PerspectiveCamera::pointer_to_ndc(&vp, Vec2::new(400.0, 300.0));
        assert_eq!(ndc, Vec2::ZERO);
        let ndc = PerspectiveCamera::pointer_to_ndc(&vp, Vec2::new(0.0, 0.0));
        assert_eq!(ndc, Vec2::new(-1.0, 1.0));
    }
}
