use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};
use crate::impls::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    parts: Vec<Polygon<P>>,
}

impl<P> MultiPolygon<P> {
    /// Polygons of the set.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> Geometry for MultiPolygon<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::MultiPolygon(MultiPolygon {
            parts: self
                .parts
                .iter()
                .map(|p| p.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        }))
    }
}
