use std::f64::{INFINITY, NEG_INFINITY};

use cgmath::Vector3;

use super::vtx::Point;

/// An axis-aligned bounding box in 3D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point
}

impl Aabb {
    /// Creates the smallest aabb that encloses all of the points returned
    /// by the given iterator.
    /// Returns an aabb with max at negative infinity and min at positive infinity if
    /// the given iterator was empty.
    pub fn from_points<P>(points: P) -> Aabb
        where P: IntoIterator<Item = Point>
    {
        points.into_iter()
            .fold(
                Aabb {
                    min: Vector3::new(INFINITY, INFINITY, INFINITY),
                    max: Vector3::new(NEG_INFINITY, NEG_INFINITY, NEG_INFINITY)
                },
                |Aabb { min, max }, p| {
                    Aabb {
                        min: Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                        max: Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z))
                    }
                }
            )
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    fn is_point_outside(&self, point: Point, tolerance: f64) -> bool {
        point.x < self.min.x - tolerance || point.x > self.max.x + tolerance ||
            point.y < self.min.y - tolerance || point.y > self.max.y + tolerance ||
            point.z < self.min.z - tolerance || point.z > self.max.z + tolerance
    }

    pub fn is_point_inside(&self, point: Point) -> bool {
        !self.is_point_outside(point, 0.0)
    }

    /// Like `is_point_inside`, but grows the box by `tolerance` in every direction.
    pub fn is_point_inside_with_tolerance(&self, point: Point, tolerance: f64) -> bool {
        !self.is_point_outside(point, tolerance)
    }

    /// Edge lengths of the box along x, y and z.
    pub fn extent(&self) -> Point {
        self.max - self.min
    }
}
