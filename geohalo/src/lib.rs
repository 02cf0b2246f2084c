//! Geohalo computes metric-distance buffers around geographic shapes and converts shapes between
//! geographic and planar coordinate spaces.
//!
//! The crate works on the geometry model of [`geohalo_types`]: shapes are [`Geom`] values over
//! either geographic positions or planar points. Three groups of operations are provided:
//!
//! * [`convert`] — the planar adapter: projects geographic shapes onto the degree plane and back.
//! * [`antimeridian`] — joins shapes across the ±180° longitude seam and cuts results back into
//!   parts that stay within the valid range.
//! * [`buffer`] — the buffer engine: offsets a shape by a distance in meters, measured along the
//!   great circle at the shape's location.
//!
//! ```
//! use geohalo::buffer::buffer;
//! use geohalo_types::geometry::Geom;
//! use geohalo_types::latlon;
//!
//! let halo = buffer(&Geom::Point(latlon!(0.0, 0.0)), 1000.0);
//! assert!(matches!(halo, Some(Geom::Polygon(_))));
//! ```
//!
//! All operations are pure functions over immutable inputs. Failures never panic: unsupported or
//! degenerate inputs are logged through the [`log`] facade and surface as `None`, so a batch of
//! shapes can proceed past one bad item.
//!
//! [`Geom`]: geohalo_types::geometry::Geom

pub mod antimeridian;
pub mod buffer;
pub mod convert;
mod error;

pub use error::GeoHaloError;
pub use geohalo_types;
