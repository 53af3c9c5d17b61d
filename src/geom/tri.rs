//!
//! Contains functionality for triangles.
//!

use cgmath::prelude::*;
use cgmath::Vector3;

use rand::Rng;

use super::vtx::{Point, Position};

/// The `Triangle<V>` type encapsulates three vertices.
/// A vertex must implement `geom::vtx::Position` and hence has a position
/// in 3D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle<V>
    where V : Position
{
    pub vertices: [V; 3]
}

impl<V> Triangle<V>
    where V : Position
{
    pub fn new(vertex0: V, vertex1: V, vertex2: V) -> Triangle<V> {
        Triangle {
            vertices: [vertex0, vertex1, vertex2]
        }
    }

    fn positions(&self) -> (Point, Point, Point) {
        (self.vertices[0].position(), self.vertices[1].position(), self.vertices[2].position())
    }

    /// Calculates the area of the triangle as half the magnitude of the
    /// cross product of two edges.
    ///
    /// Collinear vertices yield an area of zero.
    pub fn area(&self) -> f64 {
        let (p0, p1, p2) = self.positions();
        0.5 * (p1 - p0).cross(p2 - p0).magnitude()
    }

    /// Checks that no vertex coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter()
            .map(|v| v.position())
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
    }

    pub fn center(&self) -> Point {
        let one_over_three = 1.0 / 3.0;
        self.vertices.iter()
            .map(|v| v.position() * one_over_three)
            .sum()
    }

    /// Compute barycentric coordinates [u, v, w] for
    /// the closest point to p on the plane of the triangle.
    pub fn barycentric_at(&self, p: Point) -> [f64; 3] {
        let (p0, p1, p2) = self.positions();
        let v0 = p1 - p0;
        let v1 = p2 - p0;
        let v2 = p - p0;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        [u, v, w]
    }

    /// Maps a point of the unit square onto the triangle.
    ///
    /// Points above the diagonal are reflected into the lower-left half via
    /// `(u, v) -> (1 - v, 1 - u)` so the mapping preserves area.
    pub fn position_at_unit_square(&self, u: f64, v: f64) -> Point {
        let (u, v) = if u + v > 1.0 {
            (1.0 - v, 1.0 - u)
        } else {
            (u, v)
        };

        let (p0, p1, p2) = self.positions();
        p0 + (p1 - p0) * u + (p2 - p0) * v
    }

    /// Draws a position with uniform probability over the area of the triangle.
    pub fn sample_position<R>(&self, rng: &mut R) -> Point
        where R : Rng + ?Sized
    {
        let u : f64 = rng.gen();
        let v : f64 = rng.gen();
        self.position_at_unit_square(u, v)
    }
}

impl Triangle<Point> {
    pub fn from_arrays(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> Triangle<Point> {
        Triangle::new(
            Vector3::new(p0[0], p0[1], p0[2]),
            Vector3::new(p1[0], p1[1], p1[2]),
            Vector3::new(p2[0], p2[1], p2[2])
        )
    }
}
