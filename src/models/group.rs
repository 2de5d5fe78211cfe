use crate::models::Coordinate;

/// A maximal 4-connected group of ON cells, summarized by size and centroid
///
/// The centroid is the per-axis arithmetic mean of the member cell
/// coordinates, computed with truncating integer division. Groups are value
/// objects; two groups are equal iff both size and centroid match.
///
/// The derived `Ord` compares (size, centroid.x, centroid.y) ascending, so
/// the field order here is load-bearing: the ranking contract (largest size
/// first, ties by descending centroid x then descending centroid y) is a
/// plain descending sort over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group {
    /// Number of cells in the group, always at least 1
    pub size: usize,
    /// Truncated mean position of the group's cells
    pub centroid: Coordinate,
}

impl Group {
    /// Create a new group
    pub fn new(size: usize, centroid: Coordinate) -> Self {
        Self { size, centroid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_size_ranks_higher() {
        let big = Group::new(5, Coordinate::new(0, 0));
        let small = Group::new(2, Coordinate::new(9, 9));
        assert!(big > small);
    }

    #[test]
    fn test_size_tie_breaks_on_x_then_y() {
        let right = Group::new(2, Coordinate::new(4, 0));
        let left = Group::new(2, Coordinate::new(3, 3));
        assert!(right > left);

        let low = Group::new(2, Coordinate::new(3, 5));
        let high = Group::new(2, Coordinate::new(3, 1));
        assert!(low > high);
    }

    #[test]
    fn test_equality_is_componentwise() {
        let a = Group::new(3, Coordinate::new(1, 2));
        let b = Group::new(3, Coordinate::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, Group::new(3, Coordinate::new(2, 1)));
    }
}
