//! Loads triangle meshes from OBJ and STL files.
//!
//! Only vertex positions are read. Normals, texture coordinates and
//! materials in the files are ignored.

use std::path::Path;

use crate::error::{Error, Result};
use crate::geom::mesh::Mesh;

pub mod obj;
pub mod stl;

/// Mesh file formats the loaders understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Obj,
    Stl
}

impl Format {
    /// Guesses the format from the file extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Format> {
        let extension = path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "obj" => Ok(Format::Obj),
            "stl" => Ok(Format::Stl),
            _ => Err(Error::UnsupportedFormat { extension })
        }
    }
}

/// Loads the mesh at the given path, picking the loader by file extension.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();

    info!("Loading mesh at {:?}...", path);
    let mesh = match Format::from_path(path)? {
        Format::Obj => obj::load(path)?,
        Format::Stl => stl::load(path)?
    };
    info!("Ok, {} triangles", mesh.triangle_count());

    Ok(mesh)
}

fn ensure_not_empty(mesh: Mesh, source_name: &str) -> Result<Mesh> {
    if mesh.is_empty() {
        Err(Error::MeshParse {
            source_name: source_name.to_string(),
            message: String::from("mesh contains no triangles")
        })
    } else {
        Ok(mesh)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path("bunny.obj").unwrap(), Format::Obj);
        assert_eq!(Format::from_path("dir/BUNNY.STL").unwrap(), Format::Stl);

        match Format::from_path("bunny.ply") {
            Err(Error::UnsupportedFormat { extension }) => assert_eq!(extension, "ply"),
            other => panic!("Expected unsupported format, got {:?}", other)
        }

        assert!(Format::from_path("bunny").is_err());
    }
}
