use crate::error::{Error, Result};

use super::aabb::Aabb;
use super::tri::Triangle;
use super::vtx::{Point, Position};

/// Triangle soup as handed over by the loaders.
///
/// Only vertex positions are kept, normals of the source file are dropped.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle<Point>>
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle<Point>>) -> Mesh {
        Mesh { triangles }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Per-triangle areas, in the same order as `triangles`.
    pub fn areas(&self) -> Result<Vec<f64>> {
        mesh_area(&self.triangles)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(
            self.triangles.iter()
                .flat_map(|t| t.vertices.iter().cloned())
        )
    }
}

/// Computes the area of every triangle, in input order.
///
/// Degenerate triangles get an area of zero. Triangles with NaN or infinite
/// coordinates are rejected, since a single NaN would spread through the
/// sample weights later on.
pub fn mesh_area<V>(triangles: &[Triangle<V>]) -> Result<Vec<f64>>
    where V : Position
{
    triangles.iter()
        .enumerate()
        .map(|(idx, tri)| {
            if !tri.is_finite() {
                return Err(Error::Geometry { triangle: idx, detail: "vertex coordinate is not finite" });
            }

            let area = tri.area();
            if area.is_finite() {
                Ok(area)
            } else {
                Err(Error::Geometry { triangle: idx, detail: "area overflowed" })
            }
        })
        .collect()
}
