use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use super::PointSink;

use crate::error::Result;
use crate::geom::aabb::Aabb;
use crate::geom::vtx::Point;

/// Axis the orthographic camera looks along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAxis {
    X,
    Y,
    Z
}

impl ViewAxis {
    /// Drops the coordinate along the view axis.
    fn project(self, p: Point) -> (f64, f64) {
        match self {
            ViewAxis::X => (p.y, p.z),
            ViewAxis::Y => (p.x, p.z),
            ViewAxis::Z => (p.x, p.y)
        }
    }
}

/// Renders points as black dots on a white, square image.
pub struct PngSink {
    png_path: PathBuf,
    size: u32,
    dot_radius: u32,
    axis: ViewAxis
}

impl PngSink {
    pub fn new<P: Into<PathBuf>>(png_path: P) -> PngSink {
        PngSink {
            png_path: png_path.into(),
            size: 1024,
            dot_radius: 1,
            axis: ViewAxis::Z
        }
    }

    pub fn size(mut self, size: u32) -> PngSink {
        self.size = size;
        self
    }

    pub fn dot_radius(mut self, dot_radius: u32) -> PngSink {
        self.dot_radius = dot_radius;
        self
    }

    pub fn axis(mut self, axis: ViewAxis) -> PngSink {
        self.axis = axis;
        self
    }

    pub fn path(&self) -> &Path {
        &self.png_path
    }

    /// Rasterizes the points, scaled uniformly to fit the image with a margin.
    pub fn render(&self, points: &[Point]) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.size, self.size, Rgb([255, 255, 255]));
        if points.is_empty() || self.size == 0 {
            return img;
        }

        let bounds = Aabb::from_points(points.iter().cloned());
        let (min_u, min_v) = self.axis.project(bounds.min);
        let (max_u, max_v) = self.axis.project(bounds.max);

        let margin = 0.05 * self.size as f64;
        let drawable = self.size as f64 - 2.0 * margin;
        let extent = (max_u - min_u).max(max_v - min_v);
        let scale = if extent > 0.0 { drawable / extent } else { 0.0 };

        // Centers the shorter side
        let offset_u = margin + 0.5 * (drawable - scale * (max_u - min_u));
        let offset_v = margin + 0.5 * (drawable - scale * (max_v - min_v));

        let last = (self.size - 1) as i64;
        let r = self.dot_radius as i64;

        for &p in points {
            let (u, v) = self.axis.project(p);
            let x = (offset_u + scale * (u - min_u)).round() as i64;
            // Image rows grow downwards
            let y = last - (offset_v + scale * (v - min_v)).round() as i64;

            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy > r * r {
                        continue;
                    }

                    let (px, py) = (x + dx, y + dy);
                    if px >= 0 && py >= 0 && px <= last && py <= last {
                        img.put_pixel(px as u32, py as u32, Rgb([0, 0, 0]));
                    }
                }
            }
        }

        img
    }
}

impl PointSink for PngSink {
    fn serialize(&self, points: &[Point]) -> Result<()> {
        info!("Rendering {} points to {:?}...", points.len(), self.png_path);
        self.render(points).save(&self.png_path)?;
        Ok(())
    }
}
