use std::io::BufRead;
use std::path::Path;

use cgmath::Vector3;

use crate::error::{Error, Result};
use crate::geom::mesh::Mesh;
use crate::geom::tri::Triangle;
use crate::geom::vtx::Point;

/// Loads the obj file at the given file system path.
/// All contained models are merged into a single mesh, polygons with more
/// than three vertices are triangulated.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    // Missing or broken material libraries do not matter for the geometry
    let (models, _) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)
        .map_err(|e| parse_error(&source_name, e))?;

    super::ensure_not_empty(to_mesh(&models), &source_name)
}

/// Parses obj data from a reader, e.g. standard input.
/// Material libraries referenced by the data are not loaded.
pub fn load_reader<R: BufRead>(reader: &mut R, source_name: &str) -> Result<Mesh> {
    let (models, _) = tobj::load_obj_buf(reader, &tobj::GPU_LOAD_OPTIONS, |_| Ok(Default::default()))
        .map_err(|e| parse_error(source_name, e))?;

    super::ensure_not_empty(to_mesh(&models), source_name)
}

fn parse_error(source_name: &str, err: tobj::LoadError) -> Error {
    Error::MeshParse {
        source_name: source_name.to_string(),
        message: err.to_string()
    }
}

fn to_mesh(models: &[tobj::Model]) -> Mesh {
    let triangles = models.iter()
        .flat_map(|m| {
            let positions = &m.mesh.positions;
            let position = move |idx: u32| -> Point {
                let idx = 3 * idx as usize;
                Vector3::new(
                    positions[idx] as f64,
                    positions[idx + 1] as f64,
                    positions[idx + 2] as f64
                )
            };

            m.mesh.indices.chunks(3)
                .filter(|tri_indices| tri_indices.len() == 3)
                .map(move |tri_indices| Triangle::new(
                    position(tri_indices[0]),
                    position(tri_indices[1]),
                    position(tri_indices[2])
                ))
        })
        .collect();

    Mesh::new(triangles)
}
