pub mod queue;
pub mod sampler;
