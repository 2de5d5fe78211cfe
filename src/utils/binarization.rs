use rayon::prelude::*;

use crate::error::Error;
use crate::models::BinaryGrid;
use crate::utils::color::{ColorDistance, Rgb};

/// Classifies raster pixels as ON or OFF by color distance to a reference
///
/// A pixel is ON iff `metric(pixel, reference) <= threshold`; the threshold
/// is inclusive.
#[derive(Debug, Clone)]
pub struct DistanceBinarizer<D: ColorDistance> {
    metric: D,
    reference: Rgb,
    threshold: f64,
}

impl<D: ColorDistance> DistanceBinarizer<D> {
    /// Create a binarizer from a metric, a reference color and an inclusive threshold
    pub fn new(metric: D, reference: Rgb, threshold: f64) -> Self {
        Self {
            metric,
            reference,
            threshold,
        }
    }

    /// Classify one color
    pub fn classify(&self, color: Rgb) -> bool {
        self.metric.distance(color, self.reference) <= self.threshold
    }

    /// Binarize a raw RGB raster (3 bytes per pixel, row-major)
    ///
    /// Fails when either dimension is zero or the buffer length does not
    /// match `width * height * 3`.
    pub fn binarize(&self, rgb: &[u8], width: usize, height: usize) -> Result<BinaryGrid, Error> {
        check_raster(rgb, width, height)?;

        let mut grid = BinaryGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) * 3;
                let pixel = Rgb::new(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
                grid.set(x, y, self.classify(pixel));
            }
        }
        Ok(grid)
    }
}

impl<D: ColorDistance + Sync> DistanceBinarizer<D> {
    /// Binarize with rows classified in parallel
    ///
    /// Same result as [`DistanceBinarizer::binarize`]; rows are independent,
    /// so they are classified on the rayon pool and packed afterwards.
    pub fn binarize_parallel(
        &self,
        rgb: &[u8],
        width: usize,
        height: usize,
    ) -> Result<BinaryGrid, Error> {
        check_raster(rgb, width, height)?;

        let mut on_cells = vec![false; width * height];
        on_cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let row_start = y * width * 3;
                for (x, cell) in row.iter_mut().enumerate() {
                    let idx = row_start + x * 3;
                    let pixel = Rgb::new(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
                    *cell = self.classify(pixel);
                }
            });

        let mut grid = BinaryGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, on_cells[y * width + x]);
            }
        }
        Ok(grid)
    }
}

fn check_raster(rgb: &[u8], width: usize, height: usize) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyGrid);
    }
    let expected = width * height * 3;
    if rgb.len() != expected {
        return Err(Error::BadBufferLength {
            width,
            height,
            expected,
            actual: rgb.len(),
        });
    }
    Ok(())
}

/// Render a binary grid back to an RGB raster for inspection
pub fn render_binary(grid: &BinaryGrid, on_color: Rgb, off_color: Rgb) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(grid.width() * grid.height() * 3);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let color = if grid.get(x, y) { on_color } else { off_color };
            rgb.extend_from_slice(&[color.r, color.g, color.b]);
        }
    }
    rgb
}

/// Render a binary grid as white-on-black RGB bytes
pub fn render_binary_default(grid: &BinaryGrid) -> Vec<u8> {
    render_binary(grid, Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
}
