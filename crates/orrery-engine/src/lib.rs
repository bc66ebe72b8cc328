pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod scroll;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::types::{NodeId, UiEvent};
pub use assets::manifest::TextureManifest;
pub use assets::registry::{TextureId, TextureRegistry, TextureStatus};
pub use bridge::host::HostBufferRenderer;
pub use bridge::protocol::FrameLayout;
pub use components::light::{AmbientLight, LightState, PointLight};
pub use components::mesh::{Material, MeshComponent, Rgb, SphereMesh};
pub use components::node::{Node, Spin};
pub use crate::core::scene::SceneGraph;
pub use crate::core::time::{FrameClock, FrameTime};
pub use error::{OrreryError, Result};
pub use input::queue::{InputEvent, InputQueue};
pub use input::sampler::InputSampler;
pub use renderer::camera::{CameraPose, PerspectiveCamera};
pub use renderer::instance::{SphereBuffer, SphereInstance};
pub use renderer::traits::{Capabilities, DrawStats, FrameData, RenderTier, Renderer};
pub use renderer::viewport::{ResizeDebouncer, ResizeRequest, Viewport};
pub use scroll::{CameraSegment, OrbitSegment, PanelSegment, ScrollSpan, ScrollState, ScrollTimeline};
pub use systems::parallax::Parallax;

// Extensions: math helpers
pub use extensions::{Easing, inverse_lerp_clamped, lerp, lerp_vec3};
