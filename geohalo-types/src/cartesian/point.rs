use nalgebra::{Point2, Point3, Scalar};
use num_traits::Num;

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};

/// 2d cartesian point with `f64` coordinates.
pub type Point2d = Point2<f64>;

/// Planar coordinate used as the intermediate for buffering and overlay math. `x` and `y` are the
/// planar axes, `z` carries altitude through conversions.
pub type PlanarPoint = Point3<f64>;

/// 2d point in Cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;
}

/// 2d Cartesian point that can be constructed from a coordinate pair.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> + Sized {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// 3d point in Cartesian coordinate space.
pub trait CartesianPoint3d: CartesianPoint2d {
    /// Z coordinate.
    fn z(&self) -> Self::Num;
}

/// 3d Cartesian point that can be constructed from a coordinate triple.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> + Sized {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point3<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint3d for Point3<Num> {
    fn z(&self) -> Num {
        self.z
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint3d<Num> for Point3<Num> {
    fn new(x: Num, y: Num, z: Num) -> Self {
        Point3::new(x, y, z)
    }
}

impl<Num: Scalar> Geometry for Point3<Num> {
    type Point = Point3<Num>;

    fn project<P: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &P,
    ) -> Option<Geom<P::OutPoint>> {
        Some(Geom::Point(projection.project(self)?))
    }
}
