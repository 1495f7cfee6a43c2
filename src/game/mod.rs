pub mod board;
pub mod error;
pub mod loader;
pub mod sampler;
