pub mod binarization;
pub mod color;
