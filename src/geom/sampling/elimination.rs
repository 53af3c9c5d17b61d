//! Weighted sample elimination.
//!
//! Reduces an oversampled point set to a requested amount of points with
//! Poisson disk like spacing. Every point is weighted by how crowded its
//! neighborhood is, and the most crowded point is removed until the target
//! count is reached. Removing a point releases the weight it put on its
//! neighbors.

use std::time::Instant;

use crate::error::{Error, Result};
use crate::geom::spatial::PointIndex;
use crate::geom::vtx::Point;

use super::heap::WeightHeap;

/// Exponent of the weight falloff with distance.
pub const ALPHA : i32 = 8;

/// Neighbors within this multiple of `max_radius` put weight on a point.
pub const INTERACTION_RADIUS_FACTOR : f64 = 2.0;

/// Characteristic Poisson disk radius of `target_count` points packed
/// evenly on a surface of the given area.
pub fn max_radius(surface_area: f64, target_count: usize) -> f64 {
    (surface_area / (2.0 * (target_count as f64) * 3.0_f64.sqrt())).sqrt()
}

/// Weight that a point at `distance` puts on another point, falling off to
/// zero at `interaction_radius`.
pub fn weight(distance: f64, interaction_radius: f64) -> f64 {
    (1.0 - distance.min(interaction_radius) / interaction_radius).powi(ALPHA)
}

/// Stepwise elimination over a candidate point set.
///
/// Iterating yields the index of each removed candidate, in removal order,
/// until only the target count of candidates survive.
pub struct Elimination<'a> {
    points: &'a [Point],
    /// Radius-limited weights, `neighbors[i]` holds `(j, w(i, j))` for every
    /// other point `j` within the interaction radius of `i`.
    neighbors: Vec<Vec<(usize, f64)>>,
    heap: WeightHeap,
    target_count: usize,
    interaction_radius: f64
}

impl<'a> Elimination<'a> {
    pub fn new(points: &'a [Point], surface_area: f64, target_count: usize) -> Result<Elimination<'a>> {
        if points.len() < target_count {
            return Err(Error::InsufficientCandidates { candidates: points.len(), target: target_count });
        }

        if !(surface_area > 0.0 && surface_area.is_finite()) {
            return Err(Error::InvalidDistribution { total_area: surface_area, stage: "elimination" });
        }

        if target_count == 0 {
            // Everything goes, weights do not matter
            return Ok(Elimination {
                points,
                neighbors: vec![Vec::new(); points.len()],
                heap: WeightHeap::new(vec![0.0; points.len()]),
                target_count,
                interaction_radius: f64::INFINITY
            });
        }

        let interaction_radius = INTERACTION_RADIUS_FACTOR * max_radius(surface_area, target_count);

        trace!("Building spatial index over {} candidates...", points.len());
        let index = PointIndex::build(points)?;

        let neighbors : Vec<Vec<(usize, f64)>> = points.iter()
            .enumerate()
            .map(|(i, &p)| {
                index.query_radius_with_distance(p, interaction_radius)
                    .into_iter()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, distance)| (j, weight(distance, interaction_radius)))
                    .collect()
            })
            .collect();

        let weights : Vec<f64> = neighbors.iter()
            .map(|n| n.iter().map(|&(_, w)| w).sum())
            .collect();

        debug!(
            "Interaction radius {}, {} weighted pairs",
            interaction_radius,
            neighbors.iter().map(|n| n.len()).sum::<usize>()
        );

        Ok(Elimination {
            points,
            neighbors,
            heap: WeightHeap::new(weights),
            target_count,
            interaction_radius
        })
    }

    pub fn interaction_radius(&self) -> f64 {
        self.interaction_radius
    }

    pub fn survivor_count(&self) -> usize {
        self.heap.len()
    }

    pub fn is_alive(&self, idx: usize) -> bool {
        self.heap.contains(idx)
    }

    /// Summed weight that surviving neighbors put on the candidate.
    pub fn weight(&self, idx: usize) -> f64 {
        self.heap.weight(idx)
    }

    /// Indices of the surviving candidates in candidate order.
    pub fn survivors(&self) -> Vec<usize> {
        (0..self.points.len())
            .filter(|&idx| self.is_alive(idx))
            .collect()
    }

    /// Runs the remaining removals and returns the surviving points in
    /// candidate order.
    pub fn finish(mut self) -> Vec<Point> {
        while let Some(_) = self.next() {}

        let points = self.points;
        self.survivors()
            .into_iter()
            .map(|idx| points[idx])
            .collect()
    }
}

impl<'a> Iterator for Elimination<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.heap.len() <= self.target_count {
            return None;
        }

        let (removed, _) = self.heap.pop_max()?;
        for &(neighbor, w) in self.neighbors[removed].iter() {
            self.heap.decrease(neighbor, w);
        }

        Some(removed)
    }
}

/// Reduces `points` to exactly `target_count` well-spaced points, returned in
/// their original order.
///
/// `surface_area` is the area of the surface the points were sampled from.
pub fn eliminate(points: &[Point], surface_area: f64, target_count: usize) -> Result<Vec<Point>> {
    info!("Eliminating {} candidates down to {} samples...", points.len(), target_count);
    let start_time = Instant::now();

    let elimination = Elimination::new(points, surface_area, target_count)?;
    let survivors = elimination.finish();

    info!("Ok, took {}ms", start_time.elapsed().as_millis());

    Ok(survivors)
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::Vector3;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_square(count: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Vector3::new(rng.gen::<f64>(), rng.gen::<f64>(), 0.0))
            .collect()
    }

    fn min_distance(points: &[Point]) -> f64 {
        let mut min = f64::INFINITY;
        for (i, a) in points.iter().enumerate() {
            for b in points[(i + 1)..].iter() {
                let d = *a - *b;
                min = min.min((d.x * d.x + d.y * d.y + d.z * d.z).sqrt());
            }
        }
        min
    }

    #[test]
    fn test_max_radius() {
        let r = max_radius(6.0, 100);
        assert!((r - (6.0 / (200.0 * 3.0_f64.sqrt())).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_weight_falloff() {
        assert_eq!(weight(0.0, 2.0), 1.0);
        assert_eq!(weight(1.0, 2.0), 0.5_f64.powi(8));
        assert_eq!(weight(2.0, 2.0), 0.0);
        assert_eq!(weight(5.0, 2.0), 0.0);
    }

    #[test]
    fn test_exact_output_size() {
        let points = random_square(400, 1);

        for &target in [1, 37, 100, 399, 400].iter() {
            let result = eliminate(&points, 1.0, target).unwrap();
            assert_eq!(result.len(), target);
        }
    }

    #[test]
    fn test_insufficient_candidates() {
        let points = random_square(10, 2);

        match eliminate(&points, 1.0, 11) {
            Err(Error::InsufficientCandidates { candidates, target }) => {
                assert_eq!(candidates, 10);
                assert_eq!(target, 11);
            },
            other => panic!("Expected insufficient candidates, got {:?}", other)
        }
    }

    #[test]
    fn test_zero_area_rejected() {
        let points = random_square(10, 2);

        for &area in [0.0, -1.0, f64::NAN, f64::INFINITY].iter() {
            match eliminate(&points, area, 5) {
                Err(err @ Error::InvalidDistribution { .. }) => assert_eq!(err.stage(), "elimination"),
                other => panic!("Expected invalid distribution for area {}, got {:?}", area, other)
            }
        }
    }

    #[test]
    fn test_zero_target() {
        let points = random_square(10, 2);
        assert!(eliminate(&points, 1.0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_equal_count_keeps_input() {
        let points = random_square(50, 3);
        assert_eq!(eliminate(&points, 1.0, 50).unwrap(), points);
    }

    #[test]
    fn test_survivors_keep_candidate_order() {
        let points = random_square(200, 4);
        let result = eliminate(&points, 1.0, 50).unwrap();

        let positions : Vec<usize> = result.iter()
            .map(|p| points.iter().position(|c| c == p).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_weights_never_increase() {
        let points = random_square(300, 5);
        let mut elimination = Elimination::new(&points, 1.0, 75).unwrap();

        let mut previous : Vec<f64> = (0..points.len()).map(|i| elimination.weight(i)).collect();
        let mut removed_count = 0;

        while let Some(removed) = elimination.next() {
            assert!(!elimination.is_alive(removed));
            removed_count += 1;

            for i in elimination.survivors() {
                let w = elimination.weight(i);
                assert!(w <= previous[i], "Weight of {} increased from {} to {}", i, previous[i], w);
                previous[i] = w;
            }
        }

        assert_eq!(removed_count, 225);
        assert_eq!(elimination.survivor_count(), 75);
    }

    #[test]
    fn test_removes_heaviest_first() {
        // A tight cluster and two isolated points
        let points = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, 0.5, 0.0),
            Vector3::new(0.51, 0.5, 0.0),
            Vector3::new(0.5, 0.51, 0.0),
            Vector3::new(1.0, 1.0, 0.0)
        ];

        let mut elimination = Elimination::new(&points, 1.0, 3).unwrap();
        let removed : Vec<usize> = elimination.by_ref().collect();

        assert_eq!(removed.len(), 2);
        assert!(removed.iter().all(|idx| [1, 2, 3].contains(idx)), "Removed {:?} instead of clustered points", removed);
        assert!(elimination.is_alive(0));
        assert!(elimination.is_alive(4));
    }

    #[test]
    fn test_spacing_improves() {
        let points = random_square(2000, 6);
        let before = min_distance(&points);

        let result = eliminate(&points, 1.0, 500).unwrap();
        let after = min_distance(&result);

        assert!(after > 1.5 * before, "Minimum distance only went from {} to {}", before, after);
        assert!(after > 0.3 * max_radius(1.0, 500), "Minimum distance {} far below r_max", after);
    }
}
