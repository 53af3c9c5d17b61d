//! Blue noise point sampling on triangle meshes.
//!
//! Points are first scattered uniformly over the surface, weighted by
//! triangle area, then thinned out by weighted sample elimination until the
//! requested amount of evenly spaced points remains.

#[macro_use]
extern crate log;

pub mod error;
pub mod geom;
pub mod load;
pub mod sampler;
pub mod sink;

pub use error::{Error, Result};
pub use geom::mesh::Mesh;
pub use geom::vtx::Point;
pub use sampler::{BlueNoiseSampler, SamplerBuilder};
