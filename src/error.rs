//! Error type shared by all stages of the sampling pipeline.
//!
//! Every error is terminal for a run: no stage retries or produces
//! partial output.

use std::io;
use std::result;

use image::ImageError;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input mesh could not be parsed.
    #[error("failed to parse mesh {source_name}: {message}")]
    MeshParse {
        /// File path or stream name the mesh was read from.
        source_name: String,
        message: String,
    },

    /// A triangle has a non-finite vertex or area.
    #[error("triangle {triangle} has non-finite geometry ({detail})")]
    Geometry {
        triangle: usize,
        detail: &'static str,
    },

    /// The surface area is zero, negative or non-finite, so it cannot be
    /// sampled or used to derive a Poisson disk radius.
    #[error("mesh has no samplable surface, total area is {total_area}")]
    InvalidDistribution {
        total_area: f64,
        /// Stage that rejected the area.
        stage: &'static str,
    },

    /// Areas were passed for a different amount of triangles.
    #[error("got {areas} areas for {triangles} triangles")]
    AreaCountMismatch {
        triangles: usize,
        areas: usize,
    },

    /// Fewer candidates than requested samples.
    #[error("cannot eliminate {candidates} candidates down to {target} samples")]
    InsufficientCandidates {
        candidates: usize,
        target: usize,
    },

    /// The k-d tree rejected a point.
    #[error("point {point} could not be indexed: {message}")]
    SpatialIndex {
        point: usize,
        message: String,
    },

    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        extension: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] ImageError),
}

impl Error {
    /// Name of the pipeline stage this error originates from.
    pub fn stage(&self) -> &'static str {
        match *self {
            Error::MeshParse { .. } | Error::UnsupportedFormat { .. } => "mesh loading",
            Error::Geometry { .. } => "area computation",
            Error::InvalidDistribution { stage, .. } => stage,
            Error::AreaCountMismatch { .. } => "uniform sampling",
            Error::InsufficientCandidates { .. } | Error::SpatialIndex { .. } => "elimination",
            Error::Io(_) | Error::Image(_) => "output",
        }
    }
}
