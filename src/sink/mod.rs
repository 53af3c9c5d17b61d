use crate::error::Result;
use crate::geom::vtx::Point;

pub mod obj;
pub mod png;

pub use self::obj::ObjSink;
pub use self::png::{PngSink, ViewAxis};

/// Receives the final point set of a sampling run, e.g. to write it to disk.
pub trait PointSink {
    fn serialize(&self, points: &[Point]) -> Result<()>;
}
