//! Cartesian coordinates and primitives. The planar space is only an intermediate for
//! computational-geometry operations; see the crate documentation.

mod orient;
mod point;
mod rect;

pub use orient::Orientation;
pub use point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d, PlanarPoint,
    Point2d,
};
pub use rect::Rect;
