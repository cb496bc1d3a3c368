pub mod geometry;

pub use geometry::{Bounds, EntitySize, Rect};
