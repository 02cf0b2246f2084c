use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::geometry::{Geom, Geometry};
use crate::impls::contour::Contour;

/// A set of contours.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> MultiContour<P> {
    /// Contours of the set.
    pub fn contours(&self) -> &[Contour<P>] {
        &self.0
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}

impl<P> Geometry for MultiContour<P> {
    type Point = P;

    fn project<Proj: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &Proj,
    ) -> Option<Geom<Proj::OutPoint>> {
        Some(Geom::MultiContour(MultiContour(
            self.0
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        )))
    }
}
