use crate::cartesian::PlanarPoint;
use crate::geo::position::{AltitudeReference, GeoPoint, GeoPosition};

/// Conversion between two coordinate spaces.
pub trait Projection {
    /// Point type the projection converts from.
    type InPoint;
    /// Point type the projection converts to.
    type OutPoint;

    /// Converts a point into the output space. Returns `None` if the point cannot be represented
    /// in the output space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Converts a point back into the input space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that swaps the directions of the wrapped projection.
#[derive(Debug, Clone, Copy)]
pub struct InvertedProjection<'a, P>(&'a P);

impl<'a, P> InvertedProjection<'a, P> {
    /// Creates a new inverted projection.
    pub fn new(inner: &'a P) -> Self {
        Self(inner)
    }
}

impl<P: Projection> Projection for InvertedProjection<'_, P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.0.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.0.project(input)
    }
}

/// Maps geographic positions onto the degree plane: `x` is longitude, `y` is latitude (both in
/// degrees), `z` is altitude in meters.
///
/// The degree plane is the planar space buffering and overlay math runs in. The projection keeps
/// the configured [`AltitudeReference`] so that unprojection can restore it; the planar side does
/// not carry the reference level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreePlane {
    reference: AltitudeReference,
}

impl DegreePlane {
    /// Creates a new projection restoring positions at the given reference level.
    pub fn new(reference: AltitudeReference) -> Self {
        Self { reference }
    }
}

impl Projection for DegreePlane {
    type InPoint = GeoPosition;
    type OutPoint = PlanarPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let (x, y, z) = (input.lon(), input.lat(), input.altitude());
        if x.is_finite() && y.is_finite() && z.is_finite() {
            Some(PlanarPoint::new(x, y, z))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        if input.x.is_finite() && input.y.is_finite() && input.z.is_finite() {
            Some(GeoPosition::new(input.y, input.x, input.z, self.reference))
        } else {
            None
        }
    }
}
