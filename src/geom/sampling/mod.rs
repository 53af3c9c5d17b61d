//! Point sampling on triangle surfaces.
//!
//! `area_weighted` produces white noise over a surface, `elimination` thins
//! it out into blue noise.

pub mod area_weighted;
pub mod elimination;
mod heap;

pub use self::area_weighted::{sample_surface, UniformMeshSampler};
pub use self::elimination::{eliminate, Elimination};
