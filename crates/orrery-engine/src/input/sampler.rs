use glam::Vec2;

/// Cached pointer and scroll state, sampled once per tick.
///
/// Host events only write plain fields here; the app reads them during
/// `update`. Nothing is shared across threads, so no locking is involved.
#[derive(Debug, Clone)]
pub struct InputSampler {
    pointer_px: Option<Vec2>,
    scroll_px: f32,
    viewport: Vec2,
    scroll_changed: bool,
    pointer_changed: bool,
}

impl InputSampler {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            pointer_px: None,
            scroll_px: 0.0,
            viewport: Vec2::new(viewport_width, viewport_height),
            // First frame must apply the scroll state once
            scroll_changed: true,
            pointer_changed: false,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer_px = Some(Vec2::new(x, y));
        self.pointer_changed = true;
    }

    pub fn set_scroll(&mut self, scroll_px: f32) {
        if scroll_px != self.scroll_px {
            self.scroll_px = scroll_px;
            self.scroll_changed = true;
        }
    }

    /// Track the applied viewport size. Normalized scroll depends on it.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.scroll_changed = true;
    }

    /// Pointer position in CSS pixels, if the pointer has moved at least once.
    pub fn pointer_px(&self) -> Option<Vec2> {
        self.pointer_px
    }

    /// Pointer position normalized to [-0.5, 0.5] on each axis, y down.
    /// (0, 0) is the viewport centre and also the value before any pointer event.
    pub fn cursor(&self) -> Vec2 {
        match self.pointer_px {
            Some(p) if self.viewport.x > 0.0 && self.viewport.y > 0.0 => {
                p / self.viewport - Vec2::splat(0.5)
            }
            _ => Vec2::ZERO,
        }
    }

    /// Normalized scroll offset: scroll pixels / viewport height.
    pub fn scroll(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.scroll_px / self.viewport.y
        } else {
            0.0
        }
    }

    /// Whether the normalized scroll may have changed since the last frame.
    pub fn scroll_changed(&self) -> bool {
        self.scroll_changed
    }

    pub fn pointer_changed(&self) -> bool {
        self.pointer_changed
    }

    /// Clear per-frame change flags.
    pub fn end_frame(&mut self) {
        self.scroll_changed = false;
        self.pointer_changed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_defaults_to_centre() {
        let s = InputSampler::new(800.0, 600.0);
        assert_eq!(s.cursor(), Vec2::ZERO);
    }

    #[test]
    fn cursor_is_normalized() {
        let mut s = InputSampler::new(800.0, 600.0);
        s.set_pointer(400.0, 300.0);
        assert_eq!(s.cursor(), Vec2::ZERO);
        s.set_pointer(800.0, 0.0);
        assert_eq!(s.cursor(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn scroll_is_in_viewport_heights() {
        let mut s = InputSampler::new(800.0, 600.0);
        s.set_scroll(720.0);
        assert!((s.scroll() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn resize_renormalizes_scroll() {
        let mut s = InputSampler::new(800.0, 600.0);
        s.set_scroll(600.0);
        s.end_frame();
        s.set_viewport(800.0, 300.0);
        assert!(s.scroll_changed());
        assert!((s.scroll() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn change_flags_reset_each_frame() {
        let mut s = InputSampler::new(800.0, 600.0);
        assert!(s.scroll_changed());
        s.end_frame();
        assert!(!s.scroll_changed());
        s.set_scroll(0.0);
        assert!(!s.scroll_changed(), "same offset is not a change");
        s.set_scroll(10.0);
        assert!(s.scroll_changed());
    }
}
