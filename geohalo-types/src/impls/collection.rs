use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};

/// Heterogeneous list of geometries.
///
/// Collections place no constraint on their members here; operations that require uniform member
/// kinds (merging into a multi-shape, buffering) enforce that themselves.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeometryCollection<P>(Vec<Geom<P>>);

impl<P> GeometryCollection<P> {
    /// Member geometries of the collection.
    pub fn geometries(&self) -> &[Geom<P>] {
        &self.0
    }
}

impl<P> From<Vec<Geom<P>>> for GeometryCollection<P> {
    fn from(value: Vec<Geom<P>>) -> Self {
        Self(value)
    }
}

impl<P> Geometry for GeometryCollection<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::Collection(GeometryCollection(
            self.0
                .iter()
                .map(|g| g.project(projection))
                .collect::<Option<Vec<_>>>()?,
        )))
    }
}
