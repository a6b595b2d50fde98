pub mod config;
pub mod fallback;
pub mod filters;
pub mod generator;
pub mod outcome;
pub mod sampler;
pub mod scoring;

pub use config::*;
pub use generator::*;
pub use outcome::*;
