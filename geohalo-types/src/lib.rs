//! Geometry types for the geohalo buffer engine.
//!
//! The crate separates two coordinate worlds:
//!
//! * **Geographic** positions on the surface of the Earth, expressed as latitude and longitude in
//!   degrees with an optional altitude (see [`geo::GeoPosition`]).
//! * **Planar** coordinates in a Cartesian space used as an intermediate for computational-geometry
//!   operations (see [`cartesian::PlanarPoint`]). Planar coordinates have no geographic meaning of
//!   their own; they only make sense together with the [`geo::Projection`] that produced them.
//!
//! Shapes ([`impls::Contour`], [`impls::Polygon`] and the multi- and collection variants) are
//! generic over the point type, so the same polygon type is used on both sides of a projection.
//! The [`geometry::Geom`] enum ties all shape variants together and is the type most operations
//! consume and produce.
//!
//! With the `geo-types` feature (enabled by default) planar shapes convert to and from the
//! `geo-types` primitives, which gives access to the wider *georust* algorithm ecosystem. The
//! `geojson` feature adds conversion between geographic shapes and GeoJSON geometry objects.

pub mod cartesian;
mod error;
pub mod geo;
pub mod geometry;
pub mod impls;

#[cfg(feature = "geo-types")]
pub mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use error::ShapeError;
pub use geo::NewGeoPoint;
pub use geometry::{Geom, Geometry};
