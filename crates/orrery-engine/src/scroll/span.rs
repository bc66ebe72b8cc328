use crate::error::{OrreryError, Result};

/// A half-open range `[start, end)` of normalized scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpan {
    pub start: f32,
    pub end: f32,
}

impl ScrollSpan {
    /// Build a span, rejecting empty, reversed or non-finite ranges.
    pub fn new(name: &str, start: f32, end: f32) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(OrreryError::InvalidSpan { name: name.to_string(), start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, s: f32) -> bool {
        s >= self.start && s < self.end
    }

    /// Position of `s` within the span; 0 at `start`, 1 at `end`. Not clamped.
    pub fn fraction(&self, s: f32) -> f32 {
        (s - self.start) / (self.end - self.start)
    }

    pub fn overlaps(&self, other: &ScrollSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn width(&self) -> f32 {
        self.end - self.start
    }
}
