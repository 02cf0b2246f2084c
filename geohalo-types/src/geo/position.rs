use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::projection::Projection;
use crate::geometry::{Geom, Geometry};

/// Vertical datum an altitude value is measured against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub enum AltitudeReference {
    /// Altitude above the terrain surface.
    #[default]
    Terrain,
    /// Altitude above the reference ellipsoid.
    Ellipsoid,
}

/// Position on the surface of the Earth.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`; constructors clamp
/// and wrap out-of-range input. A longitude of exactly `±180` is kept as authored and never
/// flipped to the opposite sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPosition {
    lat: f64,
    lon: f64,
    altitude: f64,
    reference: AltitudeReference,
}

impl GeoPosition {
    /// Creates a new position, clamping latitude and wrapping longitude into valid range.
    pub fn new(lat: f64, lon: f64, altitude: f64, reference: AltitudeReference) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: wrap_longitude(lon),
            altitude,
            reference,
        }
    }

    /// Creates a new position from another.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self::latlon(other.lat(), other.lon())
    }

    /// Altitude in meters above the reference level.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Vertical datum of the altitude value.
    pub fn reference(&self) -> AltitudeReference {
        self.reference
    }
}

/// Wraps a longitude value into `[-180, 180]`. In-range values, `±180` included, are returned
/// untouched.
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        lon - ((lon + 180.0) / 360.0).floor() * 360.0
    }
}

/// 2d point on the surface of the Earth.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;

    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from latitude and longitude values.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a new point.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a new point.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

impl GeoPoint for GeoPosition {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPosition {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, 0.0, AltitudeReference::default())
    }
}

impl Geometry for GeoPosition {
    type Point = Self;

    fn project<P: Projection<InPoint = Self::Point> + ?Sized>(
        &self,
        projection: &P,
    ) -> Option<Geom<P::OutPoint>> {
        Some(Geom::Point(projection.project(self)?))
    }
}

/// Creates a new [`GeoPosition`] from latitude and longitude values (in degrees).
///
/// ```
/// use geohalo_types::geo::GeoPoint;
/// use geohalo_types::latlon;
///
/// let position = latlon!(38.0, 52.0);
/// assert_eq!(position.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPosition as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
