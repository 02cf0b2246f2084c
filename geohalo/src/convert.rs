//! The planar adapter: conversion of shapes between geographic coordinates and the planar degree
//! space used by buffering and overlay math.
//!
//! Geometry collections are merged into the corresponding multi-shape before conversion, which
//! requires all members to be of the same concrete kind. A mixed collection is reported as
//! unsupported: a warning is logged and the item converts to `None`, so callers iterating a batch
//! proceed with partial results.

use geohalo_types::cartesian::PlanarPoint;
use geohalo_types::geo::{AltitudeReference, DegreePlane, GeoPosition, InvertedProjection};
use geohalo_types::geometry::{Geom, Geometry};
use geohalo_types::impls::GeometryCollection;

use crate::error::GeoHaloError;

/// Converts a geographic shape into the planar degree space.
///
/// Returns `None` for empty shapes, for collections with mixed member kinds, and for shapes with
/// non-finite coordinates.
pub fn to_planar(geometry: &Geom<GeoPosition>) -> Option<Geom<PlanarPoint>> {
    if geometry.is_empty() {
        return None;
    }

    let projection = DegreePlane::default();
    let converted = match geometry {
        Geom::Collection(collection) => match merge_collection(collection) {
            Ok(merged) => merged.project(&projection),
            Err(err) => {
                log::warn!("Skipping geometry collection: {err}");
                return None;
            }
        },
        other => other.project(&projection),
    };

    if converted.is_none() {
        log::warn!("Failed to convert {} to planar coordinates", geometry.kind());
    }
    converted
}

/// Converts a planar shape back into geographic coordinates, restoring altitudes at the given
/// reference level.
///
/// The counterpart of [`to_planar`]; the same empty and mixed-collection rules apply.
pub fn to_geographic(
    geometry: &Geom<PlanarPoint>,
    reference: AltitudeReference,
) -> Option<Geom<GeoPosition>> {
    if geometry.is_empty() {
        return None;
    }

    let projection = DegreePlane::new(reference);
    let inverted = InvertedProjection::new(&projection);
    let converted = match geometry {
        Geom::Collection(collection) => match merge_collection(collection) {
            Ok(merged) => merged.project(&inverted),
            Err(err) => {
                log::warn!("Skipping geometry collection: {err}");
                return None;
            }
        },
        other => other.project(&inverted),
    };

    if converted.is_none() {
        log::warn!(
            "Failed to convert {} to geographic coordinates",
            geometry.kind()
        );
    }
    converted
}

/// Merges a collection of same-kind geometries into the corresponding multi-shape.
pub(crate) fn merge_collection<P: Clone>(
    collection: &GeometryCollection<P>,
) -> Result<Geom<P>, GeoHaloError> {
    let members = collection.geometries();
    let Some(first) = members.first() else {
        return Err(GeoHaloError::Degenerate);
    };

    fn mixed<P>(first: &Geom<P>, other: &Geom<P>) -> GeoHaloError {
        GeoHaloError::UnsupportedGeometry(format!(
            "collection mixes {} and {} members",
            first.kind(),
            other.kind()
        ))
    }

    match first {
        Geom::Point(_) => {
            let mut points = Vec::with_capacity(members.len());
            for member in members {
                match member {
                    Geom::Point(p) => points.push(p.clone()),
                    other => return Err(mixed(first, other)),
                }
            }
            Ok(Geom::MultiPoint(points.into()))
        }
        Geom::Contour(_) => {
            let mut contours = Vec::with_capacity(members.len());
            for member in members {
                match member {
                    Geom::Contour(c) => contours.push(c.clone()),
                    other => return Err(mixed(first, other)),
                }
            }
            Ok(Geom::MultiContour(contours.into()))
        }
        Geom::Polygon(_) => {
            let mut polygons = Vec::with_capacity(members.len());
            for member in members {
                match member {
                    Geom::Polygon(p) => polygons.push(p.clone()),
                    other => return Err(mixed(first, other)),
                }
            }
            Ok(Geom::MultiPolygon(polygons.into()))
        }
        other => Err(GeoHaloError::UnsupportedGeometry(format!(
            "{} member in collection",
            other.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use geohalo_types::impls::{ClosedContour, Contour, Polygon};
    use geohalo_types::latlon;

    fn polygon_with_hole() -> Geom<GeoPosition> {
        Geom::Polygon(Polygon::new(
            ClosedContour::new(vec![
                GeoPosition::new(0.0, 0.0, 10.0, AltitudeReference::Terrain),
                GeoPosition::new(0.0, 10.0, 20.0, AltitudeReference::Terrain),
                GeoPosition::new(10.0, 10.0, 30.0, AltitudeReference::Terrain),
                GeoPosition::new(10.0, 0.0, 40.0, AltitudeReference::Terrain),
            ]),
            vec![ClosedContour::new(vec![
                latlon!(2.0, 2.0),
                latlon!(2.0, 4.0),
                latlon!(4.0, 4.0),
                latlon!(4.0, 2.0),
            ])],
        ))
    }

    #[test]
    fn round_trip_is_lossless() {
        let geometry = polygon_with_hole();
        let planar = to_planar(&geometry).expect("converted to planar");
        let back = to_geographic(&planar, AltitudeReference::Terrain).expect("converted back");
        assert_eq!(back, geometry);
    }

    #[test]
    fn empty_shape_converts_to_none() {
        let empty: Geom<GeoPosition> = Geom::Contour(Contour::open(vec![]));
        assert!(to_planar(&empty).is_none());
    }

    #[test]
    fn uniform_collection_becomes_multi_shape() {
        let collection = Geom::Collection(GeometryCollection::from(vec![
            Geom::Point(latlon!(1.0, 2.0)),
            Geom::Point(latlon!(3.0, 4.0)),
        ]));
        let planar = to_planar(&collection).expect("converted");
        assert_matches!(&planar, Geom::MultiPoint(points) if points.points().len() == 2);
    }

    #[test]
    fn mixed_collection_is_skipped() {
        let collection = Geom::Collection(GeometryCollection::from(vec![
            Geom::Point(latlon!(1.0, 2.0)),
            polygon_with_hole(),
        ]));
        assert!(to_planar(&collection).is_none());
    }

    #[test]
    fn nested_multi_shape_in_collection_is_unsupported() {
        let collection = GeometryCollection::from(vec![Geom::MultiPoint(
            vec![latlon!(0.0, 0.0)].into(),
        )]);
        assert_matches!(
            merge_collection(&collection),
            Err(GeoHaloError::UnsupportedGeometry(_))
        );
    }

    #[test]
    fn non_finite_coordinates_fail_conversion() {
        let geometry = Geom::Point(latlon!(0.0, f64::NAN));
        assert!(to_planar(&geometry).is_none());
    }
}
