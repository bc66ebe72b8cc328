pub mod parallax;
pub mod picking;
pub mod render;
pub mod spin;
