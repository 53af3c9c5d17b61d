//! Contains the sampling pipeline: areas, oversampled uniform candidates,
//! elimination, and finally handing the result to the sinks.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::geom::mesh::{mesh_area, Mesh};
use crate::geom::sampling::{eliminate, sample_surface};
use crate::geom::vtx::Point;
use crate::sink::PointSink;

/// Blue noise sampler for triangle meshes.
/// Using the builder is recommended.
pub struct BlueNoiseSampler {
    /// Amount of points in the result
    sample_count: usize,
    /// Candidates per result point
    oversample_factor: f64,
    seed: Option<u64>,
    /// Invoked with the result after a successful run
    sinks: Vec<Box<dyn PointSink>>
}

impl BlueNoiseSampler {
    pub fn new(sample_count: usize, oversample_factor: f64, seed: Option<u64>, sinks: Vec<Box<dyn PointSink>>) -> BlueNoiseSampler {
        BlueNoiseSampler { sample_count, oversample_factor, seed, sinks }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn oversample_factor(&self) -> f64 {
        self.oversample_factor
    }

    /// Samples the mesh and passes the result to every sink.
    ///
    /// Nothing is written if any stage fails.
    pub fn run(&self, mesh: &Mesh) -> Result<Vec<Point>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };

        let points = run(mesh, self.sample_count, self.oversample_factor, &mut rng)?;

        for sink in self.sinks.iter() {
            sink.serialize(&points)?;
        }

        Ok(points)
    }
}

/// Amount of uniform candidates generated for the given sample count.
pub fn candidate_count(sample_count: usize, oversample_factor: f64) -> usize {
    let count = (oversample_factor * sample_count as f64).floor();
    if count > 0.0 { count as usize } else { 0 }
}

/// Samples `target_count` blue noise points on the mesh, drawing randomness
/// from `rng`.
pub fn run<R>(mesh: &Mesh, target_count: usize, oversample_factor: f64, rng: &mut R) -> Result<Vec<Point>>
    where R : Rng + ?Sized
{
    info!("Sampling {} blue noise points on {} triangles...", target_count, mesh.triangle_count());
    let start_time = Instant::now();

    let areas = mesh_area(&mesh.triangles)?;
    let total_area : f64 = areas.iter().sum();
    debug!("Total surface area {}", total_area);

    let candidates = sample_surface(
        &mesh.triangles,
        &areas,
        candidate_count(target_count, oversample_factor),
        rng
    )?;

    let points = eliminate(&candidates, total_area, target_count)?;

    info!("Ok, {} points, took {}ms", points.len(), start_time.elapsed().as_millis());

    Ok(points)
}
