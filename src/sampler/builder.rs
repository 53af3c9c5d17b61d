use std::path::PathBuf;

use crate::sink::{ObjSink, PngSink, PointSink};

use super::pipeline::BlueNoiseSampler;

/// Amount of points produced when no sample count is set.
pub const DEFAULT_SAMPLE_COUNT : usize = 2048;

/// Candidates generated per requested sample before elimination.
pub const DEFAULT_OVERSAMPLE_FACTOR : f64 = 4.0;

/// Builds a sampler according to provided parameters.
///
/// # Examples
///
/// The following example samples 500 points on a single triangle and
/// writes them to an OBJ file.
///
/// ```no_run
/// use bluenoise::SamplerBuilder;
/// use bluenoise::geom::mesh::Mesh;
/// use bluenoise::geom::tri::Triangle;
///
/// let mesh = Mesh::new(vec![
///     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
/// ]);
///
/// let points = SamplerBuilder::new()
///     .sample_count(500)
///     .oversample_factor(5.0)
///     .seed(42)
///     .add_sink_obj("output/triangle-samples.obj")
///     .build()
///     .run(&mesh)
///     .unwrap();
///
/// assert_eq!(points.len(), 500);
/// ```
pub struct SamplerBuilder {
    sample_count: usize,
    oversample_factor: f64,
    seed: Option<u64>,
    sinks: Vec<Box<dyn PointSink>>
}

impl Default for SamplerBuilder {
    fn default() -> SamplerBuilder {
        SamplerBuilder::new()
    }
}

impl SamplerBuilder {
    pub fn new() -> SamplerBuilder {
        SamplerBuilder {
            sample_count: DEFAULT_SAMPLE_COUNT,
            oversample_factor: DEFAULT_OVERSAMPLE_FACTOR,
            seed: None,
            sinks: Vec::new()
        }
    }

    /// Amount of points in the result.
    pub fn sample_count(mut self, sample_count: usize) -> SamplerBuilder {
        self.sample_count = sample_count;
        self
    }

    /// Trades running time for quality. Each requested sample gets this many
    /// uniformly distributed candidates to be eliminated from.
    ///
    /// Factors below one leave fewer candidates than samples and make the run
    /// fail.
    pub fn oversample_factor(mut self, oversample_factor: f64) -> SamplerBuilder {
        self.oversample_factor = oversample_factor;
        self
    }

    /// Makes runs reproducible. Without a seed, randomness comes from the OS.
    pub fn seed(mut self, seed: u64) -> SamplerBuilder {
        self.seed = Some(seed);
        self
    }

    pub fn add_sink(mut self, sink: Box<dyn PointSink>) -> SamplerBuilder {
        self.sinks.push(sink);
        self
    }

    pub fn add_sink_obj<P: Into<PathBuf>>(self, obj_file_path: P) -> SamplerBuilder {
        self.add_sink(Box::new(ObjSink::new(obj_file_path)))
    }

    pub fn add_sink_png<P: Into<PathBuf>>(self, png_file_path: P) -> SamplerBuilder {
        self.add_sink(Box::new(PngSink::new(png_file_path)))
    }

    pub fn build(self) -> BlueNoiseSampler {
        BlueNoiseSampler::new(
            self.sample_count,
            self.oversample_factor,
            self.seed,
            self.sinks
        )
    }
}
