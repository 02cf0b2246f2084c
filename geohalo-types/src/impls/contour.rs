use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};

/// Sequence of points, either open (a path) or closed (a ring).
///
/// A closed contour does not duplicate its first point at the end; the closing segment is implied
/// and [`Contour::iter_points_closing`] repeats the first point on iteration instead.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Creates a new closed contour.
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Whether the contour is closed.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Points of the contour, without the implied closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the contour; for a closed contour the first point is repeated
    /// at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        let closing = if self.is_closed {
            self.points.first()
        } else {
            None
        };
        self.points.iter().chain(closing)
    }

    /// Converts self into a [`ClosedContour`], or returns `None` if the contour is open.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Projects all the points of the contour with the given projection.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<Contour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(Contour {
            points,
            is_closed: self.is_closed,
        })
    }
}

/// Closed contour implementation.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour, without the implied closing point.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Projects all the points of the contour with the given projection.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<ClosedContour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(ClosedContour { points })
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}

impl<P> Geometry for Contour<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::Contour(self.project_points(projection)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_iterator_repeats_first_point() {
        let closed = Contour::closed(vec![1, 2, 3]);
        let points: Vec<i32> = closed.iter_points_closing().copied().collect();
        assert_eq!(points, vec![1, 2, 3, 1]);

        let open = Contour::open(vec![1, 2, 3]);
        let points: Vec<i32> = open.iter_points_closing().copied().collect();
        assert_eq!(points, vec![1, 2, 3]);

        let empty: Contour<i32> = Contour::closed(vec![]);
        assert_eq!(empty.iter_points_closing().count(), 0);
    }

    #[test]
    fn into_closed_requires_closed_contour() {
        assert!(Contour::open(vec![1]).into_closed().is_none());
        assert_eq!(
            Contour::closed(vec![1]).into_closed(),
            Some(ClosedContour::new(vec![1]))
        );
    }
}
