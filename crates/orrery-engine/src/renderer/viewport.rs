/// Output surface size and pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    /// Raw `window.devicePixelRatio`.
    pub device_pixel_ratio: f32,
    /// Ceiling applied to the device pixel ratio.
    pub max_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32, max_pixel_ratio: f32) -> Self {
        Self { width, height, device_pixel_ratio, max_pixel_ratio }
    }

    /// Width over height; 1.0 for a degenerate (zero-height) viewport.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Effective render pixel ratio, clamped to `max_pixel_ratio`.
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(self.max_pixel_ratio).max(0.0)
    }

    /// Drawing buffer size in physical pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        (
            (self.width * ratio).round().max(1.0) as u32,
            (self.height * ratio).round().max(1.0) as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0, 2.0)
    }
}

/// A resize reported by the host, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

/// Collapses a burst of resize events into one.
/// The last request wins once no new request has arrived for `quiet_secs`.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_secs: f32,
    pending: Option<ResizeRequest>,
    idle: f32,
}

impl ResizeDebouncer {
    pub fn new(quiet_secs: f32) -> Self {
        Self { quiet_secs: quiet_secs.max(0.0), pending: None, idle: 0.0 }
    }

    /// Record a resize. Restarts the quiet period.
    pub fn request(&mut self, request: ResizeRequest) {
        self.pending = Some(request);
        self.idle = 0.0;
    }

    /// Advance by `dt` seconds. Returns the settled request, if any.
    pub fn advance(&mut self, dt: f32) -> Option<ResizeRequest> {
        self.pending?;
        self.idle += dt;
        if self.idle >= self.quiet_secs {
            self.idle = 0.0;
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(width: f32, height: f32) -> ResizeRequest {
        ResizeRequest { width, height, device_pixel_ratio: 1.0 }
    }

    #[test]
    fn aspect_matches_size() {
        let vp = Viewport::new(1920.0, 1080.0, 1.0, 2.0);
        assert!((vp.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        let vp = Viewport::new(800.0, 600.0, 3.0, 2.0);
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.buffer_size(), (1600, 1200));

        let vp = Viewport::new(800.0, 600.0, 1.5, 2.0);
        assert_eq!(vp.pixel_ratio(), 1.5);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let vp = Viewport::new(800.0, 0.0, 1.0, 2.0);
        assert_eq!(vp.aspect(), 1.0);
        assert_eq!(vp.buffer_size().1, 1);
    }

    #[test]
    fn debouncer_keeps_last_request() {
        let mut d = ResizeDebouncer::new(0.15);
        d.request(req(100.0, 100.0));
        assert_eq!(d.advance(0.1), None);
        d.request(req(200.0, 100.0));
        assert_eq!(d.advance(0.1), None, "new request restarts the quiet period");
        assert_eq!(d.advance(0.1), Some(req(200.0, 100.0)));
        assert!(!d.is_pending());
        assert_eq!(d.advance(1.0), None);
    }

    #[test]
    fn zero_quiet_period_applies_next_tick() {
        let mut d = ResizeDebouncer::new(0.0);
        d.request(req(640.0, 480.0));
        assert_eq!(d.advance(0.0), Some(req(640.0, 480.0)));
    }
}
