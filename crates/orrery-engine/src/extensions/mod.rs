// extensions/mod.rs
//
// Math helpers with no dependency on the scene graph.

pub mod easing;

pub use easing::{Easing, lerp, lerp_vec3, inverse_lerp_clamped};
