use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use cgmath::Vector3;

use crate::error::{Error, Result};
use crate::geom::mesh::Mesh;
use crate::geom::tri::Triangle;
use crate::geom::vtx::Point;

/// Loads a binary or ASCII STL file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let mut file = File::open(path)
        .map_err(|e| Error::MeshParse { source_name: source_name.clone(), message: e.to_string() })?;

    load_seekable(&mut file, &source_name)
}

/// Parses STL data from a reader that cannot seek, such as standard input,
/// by buffering it in memory first.
pub fn load_reader<R: Read>(reader: &mut R, source_name: &str) -> Result<Mesh> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)
        .map_err(|e| Error::MeshParse { source_name: source_name.to_string(), message: e.to_string() })?;

    load_seekable(&mut Cursor::new(data), source_name)
}

fn load_seekable<R: Read + Seek>(reader: &mut R, source_name: &str) -> Result<Mesh> {
    let stl = stl_io::read_stl(reader)
        .map_err(|e| Error::MeshParse { source_name: source_name.to_string(), message: e.to_string() })?;

    let position = |idx: usize| -> Point {
        let v = &stl.vertices[idx];
        Vector3::new(v[0] as f64, v[1] as f64, v[2] as f64)
    };

    // Facet normals are ignored, the sampler only needs positions
    let triangles = stl.faces.iter()
        .map(|face| Triangle::new(
            position(face.vertices[0]),
            position(face.vertices[1]),
            position(face.vertices[2])
        ))
        .collect();

    super::ensure_not_empty(Mesh::new(triangles), source_name)
}
