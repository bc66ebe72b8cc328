/// Frame clock driven by host timestamps (`requestAnimationFrame` milliseconds).
/// Yields elapsed time since the first tick and the delta since the previous one.
pub struct FrameClock {
    /// Host timestamp of the first tick, in seconds.
    origin: Option<f64>,
    /// Elapsed seconds at the previous tick.
    last_elapsed: f32,
    /// Cap on a single frame's delta.
    max_delta: f32,
}

/// Timing for one tick of the render loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock's first tick.
    pub elapsed: f32,
    /// Seconds since the previous tick, capped at `max_delta`.
    pub delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            origin: None,
            last_elapsed: 0.0,
            max_delta,
        }
    }

    /// Advance to host time `now_ms`. The first tick reports zero elapsed and zero delta.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let now = now_ms / 1000.0;
        let origin = *self.origin.get_or_insert(now);
        let elapsed = (now - origin).max(0.0) as f32;
        // Cap to keep easing stable after the tab was backgrounded
        let delta = (elapsed - self.last_elapsed).clamp(0.0, self.max_delta);
        self.last_elapsed = elapsed;
        FrameTime { elapsed, delta }
    }

    /// Elapsed seconds at the last tick.
    pub fn elapsed(&self) -> f32 {
        self.last_elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(0.1);
        let t = clock.tick(12_345.0);
        assert_eq!(t.elapsed, 0.0);
        assert_eq!(t.delta, 0.0);
    }

    #[test]
    fn delta_between_ticks() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(1000.0);
        let t = clock.tick(1016.0);
        assert!((t.delta - 0.016).abs() < 1e-5, "delta was {}", t.delta);
        assert!((t.elapsed - 0.016).abs() < 1e-5);
    }

    #[test]
    fn delta_is_capped_but_elapsed_is_not() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(0.0);
        let t = clock.tick(5000.0);
        assert_eq!(t.delta, 0.1);
        assert!((t.elapsed - 5.0).abs() < 1e-5);
    }

    #[test]
    fn time_going_backwards_gives_zero_delta() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(1000.0);
        clock.tick(1050.0);
        let t = clock.tick(1020.0);
        assert_eq!(t.delta, 0.0);
    }
}
