//! Geographic positions (latitude and longitude) and conversion between geographic and planar
//! coordinate spaces (see [`Projection`]).

mod datum;
mod position;
mod projection;

pub use datum::Datum;
pub use position::{wrap_longitude, AltitudeReference, GeoPoint, GeoPosition, NewGeoPoint};
pub use projection::{DegreePlane, InvertedProjection, Projection};
