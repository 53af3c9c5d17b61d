use std::time::Instant;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{Error, Result};
use crate::geom::tri::Triangle;
use crate::geom::vtx::{Point, Position};

/// Draws points with uniform probability over the surface of a set of
/// triangles.
///
/// A triangle is picked with probability proportional to its area, then a
/// point is picked uniformly on that triangle. Triangles without area are
/// never picked.
pub struct UniformMeshSampler<'a, V>
    where V : Position + 'a
{
    triangles: &'a [Triangle<V>],
    triangle_distribution: WeightedIndex<f64>
}

impl<'a, V> UniformMeshSampler<'a, V>
    where V : Position + 'a
{
    /// Prepares sampling over the given triangles with precomputed areas, as
    /// returned by `geom::mesh::mesh_area`.
    ///
    /// Fails if the areas do not sum up to a positive, finite total.
    pub fn new(triangles: &'a [Triangle<V>], areas: &[f64]) -> Result<UniformMeshSampler<'a, V>> {
        if triangles.len() != areas.len() {
            return Err(Error::AreaCountMismatch { triangles: triangles.len(), areas: areas.len() });
        }

        let total_area : f64 = areas.iter().sum();
        if !(total_area > 0.0 && total_area.is_finite()) {
            return Err(Error::InvalidDistribution { total_area, stage: "uniform sampling" });
        }

        let zero_area_count = areas.iter()
            .filter(|a| **a == 0.0)
            .count();
        if zero_area_count > 0 {
            warn!("Ignoring {} triangles with an area of zero", zero_area_count);
        }

        let triangle_distribution = WeightedIndex::new(areas)
            .map_err(|_| Error::InvalidDistribution { total_area, stage: "uniform sampling" })?;

        Ok(UniformMeshSampler { triangles, triangle_distribution })
    }

    /// Draws a point and returns it along with the index of the triangle it lies on.
    pub fn sample_with_triangle<R>(&self, rng: &mut R) -> (usize, Point)
        where R : Rng + ?Sized
    {
        let triangle_idx = self.triangle_distribution.sample(rng);
        (triangle_idx, self.triangles[triangle_idx].sample_position(rng))
    }
}

impl<'a, V> Distribution<Point> for UniformMeshSampler<'a, V>
    where V : Position + 'a
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        self.sample_with_triangle(rng).1
    }
}

/// Generates `count` independent, area-weighted random points on the triangles.
pub fn sample_surface<V, R>(triangles: &[Triangle<V>], areas: &[f64], count: usize, rng: &mut R) -> Result<Vec<Point>>
    where V : Position,
        R : Rng + ?Sized
{
    let sampler = UniformMeshSampler::new(triangles, areas)?;

    info!("Sampling {} points uniformly on {} triangles...", count, triangles.len());
    let start_time = Instant::now();

    let points : Vec<Point> = (0..count)
        .map(|_| sampler.sample(rng))
        .collect();

    info!("Ok, took {}ms", start_time.elapsed().as_millis());

    Ok(points)
}
