//! blobscan - Connected pixel group detection library
//!
//! Labels the 4-connected groups of "on" pixels in a binary grid and
//! summarizes each group by its size and centroid, largest group first.
//! A color raster can be reduced to the binary grid by thresholded color
//! distance against a reference color.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Invalid-input error type shared by the grid, binarizer and finder
pub mod error;
/// Connected group discovery (the core traversal)
pub mod finder;
/// Core data structures (BinaryGrid, Coordinate, Group)
pub mod models;
/// Binarizer plus group finder wired together
pub mod pipeline;
/// Utility functions (color distance, binarization, rendering)
pub mod utils;

/// Image loading and grid inspection helpers for CLI and bench harnesses
pub mod tools;

pub use error::Error;
pub use finder::find_connected_groups;
pub use models::{BinaryGrid, Coordinate, Group};
pub use pipeline::ImageGroupFinder;
pub use utils::binarization::{DistanceBinarizer, render_binary, render_binary_default};
pub use utils::color::{ColorDistance, EuclideanDistance, Rgb};

/// Find connected groups of reference-colored pixels in an RGB image
///
/// # Arguments
/// * `rgb` - Raw RGB bytes (3 bytes per pixel, row-major)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `reference` - Color that counts as "on"
/// * `threshold` - Inclusive Euclidean distance cutoff for a pixel to match
///
/// # Returns
/// Groups sorted by size descending, ties by descending centroid x then y
pub fn find_groups(
    rgb: &[u8],
    width: usize,
    height: usize,
    reference: Rgb,
    threshold: f64,
) -> Result<Vec<Group>, Error> {
    ImageGroupFinder::new(EuclideanDistance, reference, threshold).find_groups(rgb, width, height)
}

/// Like [`find_groups`], classifying raster rows in parallel
///
/// Worth it on large rasters; the discovery pass itself stays sequential.
pub fn find_groups_parallel(
    rgb: &[u8],
    width: usize,
    height: usize,
    reference: Rgb,
    threshold: f64,
) -> Result<Vec<Group>, Error> {
    ImageGroupFinder::new(EuclideanDistance, reference, threshold)
        .find_groups_parallel(rgb, width, height)
}
