use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

impl<P> MultiPoint<P> {
    /// Points of the set.
    pub fn points(&self) -> &[P] {
        &self.0
    }
}

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}

impl<P> Geometry for MultiPoint<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::MultiPoint(MultiPoint(
            self.0
                .iter()
                .map(|p| projection.project(p))
                .collect::<Option<Vec<_>>>()?,
        )))
    }
}
