use crate::error::Error;
use crate::finder::find_connected_groups;
use crate::models::Group;
use crate::utils::binarization::DistanceBinarizer;
use crate::utils::color::{ColorDistance, Rgb};

/// Binarizer and group finder wired together
///
/// Thin glue over the two stages: classify every raster pixel against a
/// reference color, then label the connected ON groups of the resulting grid.
#[derive(Debug, Clone)]
pub struct ImageGroupFinder<D: ColorDistance> {
    binarizer: DistanceBinarizer<D>,
}

impl<D: ColorDistance> ImageGroupFinder<D> {
    /// Create a pipeline from a metric, a reference color and an inclusive threshold
    pub fn new(metric: D, reference: Rgb, threshold: f64) -> Self {
        Self {
            binarizer: DistanceBinarizer::new(metric, reference, threshold),
        }
    }

    /// Find connected groups of reference-colored pixels in an RGB raster
    pub fn find_groups(&self, rgb: &[u8], width: usize, height: usize) -> Result<Vec<Group>, Error> {
        let grid = self.binarizer.binarize(rgb, width, height)?;
        find_connected_groups(&grid)
    }
}

impl<D: ColorDistance + Sync> ImageGroupFinder<D> {
    /// Same as [`ImageGroupFinder::find_groups`] with row-parallel classification
    pub fn find_groups_parallel(
        &self,
        rgb: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Vec<Group>, Error> {
        let grid = self.binarizer.binarize_parallel(rgb, width, height)?;
        find_connected_groups(&grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use crate::utils::color::EuclideanDistance;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn raster(pixels: &[Rgb]) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(pixels.len() * 3);
        for p in pixels {
            rgb.extend_from_slice(&[p.r, p.g, p.b]);
        }
        rgb
    }

    #[test]
    fn test_single_white_block() {
        // 3x3 black image with a 2x2 white block at rows/cols {1,2}
        let mut pixels = vec![BLACK; 9];
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            pixels[y * 3 + x] = WHITE;
        }

        // Zero threshold: only exact white matches
        let finder = ImageGroupFinder::new(EuclideanDistance, WHITE, 0.0);
        let groups = finder.find_groups(&raster(&pixels), 3, 3).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size, 4);
        // sums (6, 6) over 4 cells, truncated
        assert_eq!(groups[0].centroid, Coordinate::new(1, 1));
    }

    #[test]
    fn test_two_isolated_white_pixels() {
        let mut pixels = vec![BLACK; 9];
        pixels[0] = WHITE; // (0, 0)
        pixels[8] = WHITE; // (2, 2)

        let finder = ImageGroupFinder::new(EuclideanDistance, WHITE, 0.0);
        let groups = finder.find_groups(&raster(&pixels), 3, 3).unwrap();

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.size == 1));
        // Descending centroid x puts (2, 2) first
        assert_eq!(groups[0].centroid, Coordinate::new(2, 2));
        assert_eq!(groups[1].centroid, Coordinate::new(0, 0));
    }

    #[test]
    fn test_all_black_image_has_no_groups() {
        let pixels = vec![BLACK; 9];
        let finder = ImageGroupFinder::new(EuclideanDistance, WHITE, 0.0);
        let groups = finder.find_groups(&raster(&pixels), 3, 3).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_parallel_pipeline_matches_serial() {
        let mut pixels = vec![BLACK; 25];
        for &(x, y) in &[(0, 0), (1, 0), (3, 2), (3, 3), (4, 4)] {
            pixels[y * 5 + x] = WHITE;
        }
        let rgb = raster(&pixels);

        let finder = ImageGroupFinder::new(EuclideanDistance, WHITE, 0.0);
        let serial = finder.find_groups(&rgb, 5, 5).unwrap();
        let parallel = finder.find_groups_parallel(&rgb, 5, 5).unwrap();
        assert_eq!(serial, parallel);
    }
}
