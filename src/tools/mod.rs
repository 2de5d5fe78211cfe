use crate::models::BinaryGrid;
use std::path::Path;

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Save an RGB byte raster as an image file.
pub fn save_rgb<P: AsRef<Path>>(
    path: P,
    rgb: &[u8],
    width: usize,
    height: usize,
) -> Result<(), image::ImageError> {
    let buffer: image::RgbImage =
        image::ImageBuffer::from_raw(width as u32, height as u32, rgb.to_vec())
            .expect("raster length matches dimensions");
    buffer.save(path)
}

/// Summary statistics for a binary grid.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Count of ON cells.
    pub on_cells: usize,
    /// Total cells in the grid.
    pub total_cells: usize,
    /// Ratio of ON cells to total cells.
    pub on_ratio: f64,
}

/// Compute ON-cell stats for a binary grid.
pub fn grid_stats(grid: &BinaryGrid) -> GridStats {
    let on = grid.count_on();
    let total = grid.width() * grid.height();
    let ratio = if total == 0 {
        0.0
    } else {
        on as f64 / total as f64
    };
    GridStats {
        on_cells: on,
        total_cells: total,
        on_ratio: ratio,
    }
}
