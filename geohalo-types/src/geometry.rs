//! Geometry variants and common operations over them. See [`Geom`].

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::geo::Projection;
use crate::impls::{
    Contour, GeometryCollection, MultiContour, MultiPoint, MultiPolygon, Polygon,
};

/// Geometry of one of the supported kinds. Operations over geometries dispatch by exhaustive
/// matching on this enum.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Point.
    Point(P),
    /// Set of points.
    MultiPoint(MultiPoint<P>),
    /// Open or closed contour.
    Contour(Contour<P>),
    /// Set of contours.
    MultiContour(MultiContour<P>),
    /// Polygon with optional holes.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(MultiPolygon<P>),
    /// Heterogeneous collection of geometries.
    Collection(GeometryCollection<P>),
}

/// Anything that can be projected into a different coordinate space.
pub trait Geometry {
    /// Point type of the geometry.
    type Point;

    /// Converts the geometry with the given projection. Returns `None` if any of the points cannot
    /// be converted.
    fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = Self::Point> + ?Sized;
}

impl<P> Geometry for Geom<P> {
    type Point = P;

    fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        match self {
            Geom::Point(v) => Some(Geom::Point(projection.project(v)?)),
            Geom::MultiPoint(v) => v.project(projection),
            Geom::Contour(v) => v.project(projection),
            Geom::MultiContour(v) => v.project(projection),
            Geom::Polygon(v) => v.project(projection),
            Geom::MultiPolygon(v) => v.project(projection),
            Geom::Collection(v) => v.project(projection),
        }
    }
}

impl<P> Geom<P> {
    /// Whether the geometry contains no points at all.
    pub fn is_empty(&self) -> bool {
        self.iter_points().next().is_none()
    }

    /// Short name of the geometry kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Geom::Point(_) => "point",
            Geom::MultiPoint(_) => "multipoint",
            Geom::Contour(_) => "contour",
            Geom::MultiContour(_) => "multicontour",
            Geom::Polygon(_) => "polygon",
            Geom::MultiPolygon(_) => "multipolygon",
            Geom::Collection(_) => "collection",
        }
    }

    /// Iterates over all points of the geometry, in ring/member order, without implied closing
    /// points.
    pub fn iter_points(&self) -> Box<dyn Iterator<Item = &P> + '_> {
        match self {
            Geom::Point(p) => Box::new(std::iter::once(p)),
            Geom::MultiPoint(v) => Box::new(v.points().iter()),
            Geom::Contour(v) => Box::new(v.points().iter()),
            Geom::MultiContour(v) => {
                Box::new(v.contours().iter().flat_map(|c| c.points().iter()))
            }
            Geom::Polygon(v) => Box::new(v.iter_contours().flat_map(|c| c.points.iter())),
            Geom::MultiPolygon(v) => Box::new(
                v.parts()
                    .iter()
                    .flat_map(|p| p.iter_contours().flat_map(|c| c.points.iter())),
            ),
            Geom::Collection(v) => {
                Box::new(v.geometries().iter().flat_map(|g| g.iter_points()))
            }
        }
    }

    /// Bounding rectangle of the geometry, or `None` if it is empty.
    pub fn bounding_rect(&self) -> Option<Rect<P::Num>>
    where
        P: CartesianPoint2d,
    {
        Rect::from_points(self.iter_points())
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<P> From<GeometryCollection<P>> for Geom<P> {
    fn from(value: GeometryCollection<P>) -> Self {
        Self::Collection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::PlanarPoint;
    use crate::impls::ClosedContour;

    fn planar_polygon() -> Polygon<PlanarPoint> {
        Polygon::new(
            ClosedContour::new(vec![
                PlanarPoint::new(0.0, 0.0, 0.0),
                PlanarPoint::new(4.0, 0.0, 0.0),
                PlanarPoint::new(4.0, 2.0, 0.0),
                PlanarPoint::new(0.0, 2.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn empty_geometries() {
        let empty: Geom<PlanarPoint> = Geom::Contour(Contour::open(vec![]));
        assert!(empty.is_empty());
        assert!(empty.bounding_rect().is_none());

        let collection: Geom<PlanarPoint> =
            Geom::Collection(GeometryCollection::from(vec![empty.clone()]));
        assert!(collection.is_empty());

        assert!(!Geom::Polygon(planar_polygon()).is_empty());
    }

    #[test]
    fn bounding_rect_covers_all_members() {
        let geom = Geom::Collection(GeometryCollection::from(vec![
            Geom::Polygon(planar_polygon()),
            Geom::Point(PlanarPoint::new(-3.0, 7.0, 0.0)),
        ]));
        assert_eq!(
            geom.bounding_rect(),
            Some(Rect::new(-3.0, 0.0, 4.0, 7.0))
        );
    }

    #[test]
    fn kind_names() {
        let point: Geom<PlanarPoint> = Geom::Point(PlanarPoint::new(0.0, 0.0, 0.0));
        assert_eq!(point.kind(), "point");
        assert_eq!(Geom::Polygon(planar_polygon()).kind(), "polygon");
    }
}
