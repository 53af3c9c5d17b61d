use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::PointSink;

use crate::error::Result;
use crate::geom::vtx::Point;

/// Writes points as the vertices of an OBJ file without faces.
pub struct ObjSink {
    obj_path: PathBuf
}

impl ObjSink {
    pub fn new<P: Into<PathBuf>>(obj_path: P) -> ObjSink {
        ObjSink { obj_path: obj_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.obj_path
    }
}

/// Writes the OBJ text for the given points.
pub fn write_points<W: Write>(points: &[Point], obj: &mut W) -> Result<()> {
    writeln!(obj, "# bluenoise point sampling, {} points", points.len())?;
    writeln!(obj, "o samples")?;

    for p in points {
        writeln!(obj, "v {} {} {}", p.x, p.y, p.z)?;
    }

    Ok(())
}

impl PointSink for ObjSink {
    fn serialize(&self, points: &[Point]) -> Result<()> {
        info!("Writing OBJ output file {:?}...", self.obj_path);

        let mut obj = BufWriter::new(File::create(&self.obj_path)?);
        write_points(points, &mut obj)?;
        obj.flush()?;

        Ok(())
    }
}
