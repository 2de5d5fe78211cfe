use crate::error::Error;

/// Cell values accepted by [`BinaryGrid::from_rows`]
pub const OFF: u8 = 0;
/// ON cell value for [`BinaryGrid::from_rows`]
pub const ON: u8 = 1;

/// Compact bit matrix storing an on/off pixel grid
///
/// Cells are packed one bit per pixel in row-major order, so a grid can never
/// be jagged or hold a value other than on/off. Raw caller input is validated
/// once in [`BinaryGrid::from_rows`]; the traversal code never has to re-check
/// cell legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryGrid {
    /// Create an all-OFF grid with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a grid from raw 0/1 rows, validating the caller's contract
    ///
    /// Fails when the input is empty (no rows, or zero-length rows), when the
    /// rows are not all the same length, or when any cell holds a value other
    /// than `0` or `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(Error::EmptyGrid);
        }

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::JaggedRows {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value != OFF && value != ON {
                    return Err(Error::InvalidCell { x, y, value });
                }
            }
        }

        let mut grid = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                grid.set(x, y, value == ON);
            }
        }
        Ok(grid)
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (x, y) is ON; out-of-bounds reads are OFF
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set the cell at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if on {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Count ON cells across the whole grid
    pub fn count_on(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid = BinaryGrid::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(!grid.get(4, 3));

        grid.set(3, 4, false);
        assert!(!grid.get(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = BinaryGrid::new(8, 8);
        grid.set(10, 10, true); // Should not panic
        assert!(!grid.get(10, 10));
    }

    #[test]
    fn test_from_rows() {
        let grid = BinaryGrid::from_rows(&[[0u8, 1, 0], [1, 0, 1]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.get(1, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(0, 0));
        assert_eq!(grid.count_on(), 3);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let no_rows: &[&[u8]] = &[];
        assert!(matches!(
            BinaryGrid::from_rows(no_rows),
            Err(Error::EmptyGrid)
        ));

        let zero_width: &[&[u8]] = &[&[], &[]];
        assert!(matches!(
            BinaryGrid::from_rows(zero_width),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows: &[&[u8]] = &[&[1, 0], &[1], &[0, 1]];
        assert!(matches!(
            BinaryGrid::from_rows(rows),
            Err(Error::JaggedRows {
                row: 1,
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_from_rows_rejects_bad_cell_value() {
        let rows: &[&[u8]] = &[&[1, 0], &[0, 2]];
        assert!(matches!(
            BinaryGrid::from_rows(rows),
            Err(Error::InvalidCell { x: 1, y: 1, value: 2 })
        ));
    }
}
