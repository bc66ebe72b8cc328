pub mod span;
pub mod timeline;

pub use span::ScrollSpan;
pub use timeline::{CameraSegment, OrbitSegment, PanelSegment, ScrollState, ScrollTimeline};
