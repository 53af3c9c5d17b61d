//! Wires area computation, uniform sampling and elimination together into
//! a single run over a mesh.

mod builder;
mod pipeline;

pub use self::builder::{SamplerBuilder, DEFAULT_OVERSAMPLE_FACTOR, DEFAULT_SAMPLE_COUNT};
pub use self::pipeline::{run, BlueNoiseSampler};
