/// Grid position with non-negative integer coordinates
///
/// `x` indexes columns and increases to the right; `y` indexes rows and
/// increases downward. Row `r`, column `c` of a grid is `Coordinate::new(c, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    /// Column index (increases rightward)
    pub x: usize,
    /// Row index (increases downward)
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
