use cgmath::Vector3;

/// A point on or near the mesh surface.
pub type Point = Vector3<f64>;

pub trait Position {
    fn position(&self) -> Point;
}

impl Position for Point {
    fn position(&self) -> Point {
        *self
    }
}
