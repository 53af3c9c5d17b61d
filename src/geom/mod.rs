//! Contains geometric primitives that the sampling relies on.
//! Among these are triangles, meshes, a spatial index and the samplers.

pub mod aabb;
pub mod mesh;
pub mod sampling;
pub mod spatial;
pub mod tri;
pub mod vtx;
