pub mod groups;

pub use groups::find_connected_groups;
