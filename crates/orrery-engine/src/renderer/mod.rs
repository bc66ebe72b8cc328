pub mod camera;
pub mod instance;
pub mod traits;
pub mod viewport;

// Re-export key types for convenient access
pub use camera::{CameraPose, CameraUniform, PerspectiveCamera};
pub use instance::{SphereBuffer, SphereInstance};
pub use traits::{Capabilities, DrawStats, FrameData, RenderTier, Renderer};
pub use viewport::{ResizeDebouncer, ResizeRequest, Viewport};
