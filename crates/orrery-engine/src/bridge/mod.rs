pub mod host;
pub mod protocol;

pub use host::HostBufferRenderer;
pub use protocol::FrameLayout;
