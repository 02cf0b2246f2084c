use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Orientation};
use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};
use crate::impls::contour::ClosedContour;

/// Polygon geometry: one outer contour and zero or more inner contours.
///
/// Inner contours represent *holes* in the polygon. The outer contour always comes first when
/// iterating.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all contours of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Casts all points of the polygon into a different type.
    pub fn cast_points<T>(&self, mut cast: impl FnMut(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_contour: ClosedContour::new(
                self.outer_contour.points.iter().map(&mut cast).collect(),
            ),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| ClosedContour::new(c.points.iter().map(&mut cast).collect()))
                .collect(),
        }
    }

    /// Returns the polygon with its outer contour wound counterclockwise and its holes clockwise.
    /// Collinear (degenerate) rings are left as they are.
    pub fn oriented(mut self) -> Self
    where
        P: CartesianPoint2d,
    {
        if Orientation::of_ring(&self.outer_contour.points) == Orientation::Clockwise {
            self.outer_contour.points.reverse();
        }
        for hole in &mut self.inner_contours {
            if Orientation::of_ring(&hole.points) == Orientation::Counterclockwise {
                hole.points.reverse();
            }
        }
        self
    }

    /// Projects all the points of the polygon with the given projection.
    pub fn project_points<T, Proj>(&self, projection: &Proj) -> Option<Polygon<T>>
    where
        Proj: Projection<InPoint = P, OutPoint = T> + ?Sized,
    {
        Some(Polygon {
            outer_contour: self.outer_contour.project_points(projection)?,
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(value: Vec<P>) -> Self {
        Self {
            outer_contour: ClosedContour::new(value),
            inner_contours: vec![],
        }
    }
}

impl<P> Geometry for Polygon<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::Polygon(self.project_points(projection)?))
    }
}
