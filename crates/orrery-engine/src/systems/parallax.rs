use glam::{Vec2, Vec3};

/// Pointer-driven camera-group offset with exponential easing.
///
/// Each tick moves the offset a fraction `min(rate·Δt, 1)` of the way to the
/// target, so it never overshoots. The target is the normalized cursor scaled
/// by `amplitude`, with y flipped so moving the pointer up raises the camera.
#[derive(Debug, Clone)]
pub struct Parallax {
    pub rate: f32,
    pub amplitude: f32,
    current: Vec2,
}

impl Parallax {
    pub fn new(rate: f32, amplitude: f32) -> Self {
        Self { rate, amplitude, current: Vec2::ZERO }
    }

    /// Target offset for a cursor in [-0.5, 0.5] (y down).
    pub fn target(&self, cursor: Vec2) -> Vec2 {
        Vec2::new(cursor.x * self.amplitude, -cursor.y * self.amplitude)
    }

    /// Ease toward the cursor's target by one tick of `dt` seconds.
    pub fn step(&mut self, cursor: Vec2, dt: f32) -> Vec3 {
        let factor = (self.rate * dt).clamp(0.0, 1.0);
        self.current += (self.target(cursor) - self.current) * factor;
        self.offset()
    }

    /// Current camera-group translation.
    pub fn offset(&self) -> Vec3 {
        self.current.extend(0.0)
    }
}
