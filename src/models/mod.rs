pub mod coordinate;
pub mod grid;
pub mod group;

pub use coordinate::Coordinate;
pub use grid::BinaryGrid;
pub use group::Group;
