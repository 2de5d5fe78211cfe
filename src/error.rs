use thiserror::Error;

/// Invalid-input errors raised before any traversal work begins
///
/// Every variant is a contract violation by the caller: the input is checked
/// up front and rejected as a whole, never mid-algorithm, and no partial
/// result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid has no rows or zero-length rows
    #[error("empty grid: width and height must both be at least 1")]
    EmptyGrid,

    /// Rows are not all the same length
    #[error("jagged grid: row {row} has length {actual}, expected {expected}")]
    JaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// A cell holds a value other than the two legal states
    #[error("invalid cell value {value} at ({x}, {y}): cells must be 0 or 1")]
    InvalidCell {
        /// Column of the offending cell
        x: usize,
        /// Row of the offending cell
        y: usize,
        /// The illegal value
        value: u8,
    },

    /// Raster buffer length does not match the stated dimensions
    #[error("bad raster buffer: got {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BadBufferLength {
        /// Stated raster width
        width: usize,
        /// Stated raster height
        height: usize,
        /// `width * height * 3`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
}
