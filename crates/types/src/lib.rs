pub mod data;
pub mod geometry;

pub use data::{Row, RuntimeData, Scalar, TableBinding};
pub use geometry::Size;
