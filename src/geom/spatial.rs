//! Radius queries over a fixed set of points.

use kdtree::distance::squared_euclidean;
use kdtree::KdTree;

use crate::error::{Error, Result};

use super::vtx::Point;

/// Read-only k-d tree over a point set, answering with indices into the
/// slice it was built from.
pub struct PointIndex {
    tree: KdTree<f64, usize, [f64; 3]>,
    len: usize
}

impl PointIndex {
    pub fn build(points: &[Point]) -> Result<PointIndex> {
        let mut tree : KdTree<f64, usize, [f64; 3]> = KdTree::new(3);

        for (idx, p) in points.iter().enumerate() {
            tree.add([p.x, p.y, p.z], idx)
                .map_err(|e| Error::SpatialIndex { point: idx, message: format!("{:?}", e) })?;
        }

        Ok(PointIndex { tree, len: points.len() })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of all points with a distance of at most `radius` to `center`,
    /// paired with their distance.
    pub fn query_radius_with_distance(&self, center: Point, radius: f64) -> Vec<(usize, f64)> {
        if self.len == 0 {
            return Vec::new();
        }

        let radius_sqr = radius * radius;
        // The tree only fails on non-finite queries, which match nothing
        self.tree.within(&[center.x, center.y, center.z], radius_sqr, &squared_euclidean)
            .map(|found| {
                found.into_iter()
                    .filter(|&(dist_sqr, _)| dist_sqr <= radius_sqr)
                    .map(|(dist_sqr, &idx)| (idx, dist_sqr.sqrt()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Indices of all points with a distance of at most `radius` to `center`.
    pub fn query_radius(&self, center: Point, radius: f64) -> Vec<usize> {
        self.query_radius_with_distance(center, radius)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect()
    }
}
