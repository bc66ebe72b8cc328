use bytemuck::{Pod, Zeroable};

/// Per-sphere render data written to the frame buffer for the host renderer.
/// Must match the host protocol: 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    /// World-space centre.
    pub position: [f32; 3],
    /// World-space radius.
    pub radius: f32,
    /// World-space orientation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    /// Texture slot, or -1 for none.
    pub texture_slot: f32,
    /// 1.0 once the slot is uploaded, 0.0 while pending or failed.
    pub texture_ready: f32,
    /// Flat color used while `texture_ready` is 0.
    pub fallback: [f32; 3],
    /// Self-illumination (1.0 = ignore lighting).
    pub emissive: f32,
    /// Tessellation hint for the host (width segments).
    pub segments: f32,
    pub _pad: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sphere instances for one frame, bounded by `max_instances`.
pub struct SphereBuffer {
    pub instances: Vec<SphereInstance>,
    max_instances: usize,
    /// Spheres skipped this frame because the buffer was full.
    pub dropped: u32,
}

impl SphereBuffer {
    pub fn new(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    /// Append an instance. Returns false (and counts a drop) when full.
    pub fn push(&mut self, instance: SphereInstance) -> bool {
        if self.instances.len() >= self.max_instances {
            self.dropped += 1;
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), SphereInstance::STRIDE_BYTES);
        assert_eq!(bytemuck::cast_slice::<SphereInstance, f32>(&[SphereInstance::default()]).len(), 16);
    }

    #[test]
    fn buffer_respects_capacity() {
        let mut buf = SphereBuffer::new(2);
        assert!(buf.push(SphereInstance::default()));
        assert!(buf.push(SphereInstance::default()));
        assert!(!buf.push(SphereInstance::default()));
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.dropped, 1);

        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.dropped, 0);
    }
}
