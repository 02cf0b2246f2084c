//! The buffer engine: offsets shapes by a distance in meters.
//!
//! The metric distance is converted into an angular one at the shape's location — the latitude
//! advance of a great-circle step of the same length due north from the center of the shape's
//! bounding rectangle — and the buffer itself is computed in the planar degree space. Shapes are
//! joined across the antimeridian before buffering and the result is cut back into valid
//! longitude range, so a buffer near ±180° comes out as a two-part multipolygon instead of a
//! wrap-around artifact.
//!
//! Buffering never panics on bad input: unsupported and degenerate shapes are logged and surface
//! as `None` (see the crate documentation for the failure policy).

use geo::{Area, BooleanOps, HaversineDestination};
use geo_types::{coord, Coord, LineString, Point};
use geohalo_types::cartesian::PlanarPoint;
use geohalo_types::geo::{DegreePlane, GeoPosition, InvertedProjection};
use geohalo_types::geometry::{Geom, Geometry};
use geohalo_types::impls::{Contour, MultiPolygon, Polygon};

use crate::antimeridian;
use crate::convert::merge_collection;
use crate::error::GeoHaloError;

mod planar;

/// Area in square degrees below which a buffer result counts as fully collapsed.
const MIN_RESULT_AREA: f64 = 1e-12;

/// Buffers a shape by the given distance in meters, measured along the great circle at the
/// shape's location.
///
/// The result is a polygon, or a multipolygon when the buffer crosses the antimeridian.
/// Collections are buffered as a whole and must consist of members of one concrete kind.
///
/// Policies:
/// * a zero distance returns the input unchanged;
/// * a negative distance erodes a polygon inwards and returns `None` once the polygon is
///   consumed entirely; for points and contours a negative distance is always `None`;
/// * failures (mixed collections, non-finite input) are logged and return `None`.
pub fn buffer(geometry: &Geom<GeoPosition>, distance_meters: f64) -> Option<Geom<GeoPosition>> {
    match buffer_inner(geometry, distance_meters) {
        Ok(result) => Some(result),
        Err(GeoHaloError::Degenerate) => {
            log::debug!(
                "Buffer of {} by {distance_meters} m is degenerate",
                geometry.kind()
            );
            None
        }
        Err(err) => {
            log::warn!(
                "Failed to buffer {} by {distance_meters} m: {err}",
                geometry.kind()
            );
            None
        }
    }
}

fn buffer_inner(
    geometry: &Geom<GeoPosition>,
    distance_meters: f64,
) -> Result<Geom<GeoPosition>, GeoHaloError> {
    if !distance_meters.is_finite() {
        return Err(GeoHaloError::Computation(
            "buffer distance is not finite".into(),
        ));
    }
    if geometry.is_empty() {
        return Err(GeoHaloError::Degenerate);
    }
    if distance_meters == 0.0 {
        return Ok(geometry.clone());
    }

    let reference = geometry
        .iter_points()
        .next()
        .map(|p| p.reference())
        .unwrap_or_default();

    let merged;
    let geometry = if let Geom::Collection(collection) = geometry {
        merged = merge_collection(collection)?;
        &merged
    } else {
        geometry
    };

    let projection = DegreePlane::new(reference);
    let planar = geometry.project(&projection).ok_or_else(|| {
        GeoHaloError::Computation("shape contains non-finite coordinates".into())
    })?;
    let joined = antimeridian::join(&planar);

    let angular = angular_distance(&joined, distance_meters)?;
    let buffered = buffer_planar(&joined, angular)?;
    if buffered.0.is_empty() || buffered.unsigned_area() <= MIN_RESULT_AREA {
        return Err(GeoHaloError::Degenerate);
    }

    let parts: MultiPolygon<PlanarPoint> = (&buffered).into();
    let parts = MultiPolygon::from(
        parts
            .parts()
            .iter()
            .map(|p| p.clone().oriented())
            .collect::<Vec<_>>(),
    );

    let shaped = match antimeridian::normalize(&Geom::MultiPolygon(parts)) {
        Geom::MultiPolygon(mp) if mp.parts().len() == 1 => Geom::Polygon(mp.parts()[0].clone()),
        other => other,
    };

    shaped
        .project(&InvertedProjection::new(&projection))
        .ok_or_else(|| GeoHaloError::Computation("failed to restore geographic coordinates".into()))
}

/// Converts a metric distance into degrees at the shape's location: the latitude advance of a
/// great-circle step of `meters` due north from the center of the shape's bounding rectangle.
fn angular_distance(planar: &Geom<PlanarPoint>, meters: f64) -> Result<f64, GeoHaloError> {
    let rect = planar.bounding_rect().ok_or(GeoHaloError::Degenerate)?;
    let center = rect.center();
    let origin = Point::new(center.x, center.y.clamp(-90.0, 90.0));
    let destination = origin.haversine_destination(0.0, meters.abs());

    let delta = (destination.y() - origin.y()).abs();
    if !delta.is_finite() || delta == 0.0 {
        return Err(GeoHaloError::Computation(format!(
            "could not convert {meters} m to an angular distance"
        )));
    }
    Ok(if meters < 0.0 { -delta } else { delta })
}

fn buffer_planar(
    geometry: &Geom<PlanarPoint>,
    angular: f64,
) -> Result<geo_types::MultiPolygon<f64>, GeoHaloError> {
    // points and contours have no interior to erode
    if angular < 0.0 && !matches!(geometry, Geom::Polygon(_) | Geom::MultiPolygon(_)) {
        return Err(GeoHaloError::Degenerate);
    }

    let segments = planar::CIRCLE_SEGMENTS;
    let result = match geometry {
        Geom::Point(p) => geo_types::MultiPolygon::new(vec![planar::circle(
            coord(p),
            angular,
            segments,
        )]),
        Geom::MultiPoint(v) => planar::union_all(
            v.points()
                .iter()
                .map(|p| planar::circle(coord(p), angular, segments))
                .collect(),
        ),
        Geom::Contour(c) => planar::union_all(contour_capsules(c, angular, segments)),
        Geom::MultiContour(v) => planar::union_all(
            v.contours()
                .iter()
                .flat_map(|c| contour_capsules(c, angular, segments))
                .collect(),
        ),
        Geom::Polygon(p) => buffer_polygon(p, angular, segments),
        Geom::MultiPolygon(v) => {
            let mut result = geo_types::MultiPolygon::new(vec![]);
            for part in v.parts() {
                let buffered = buffer_polygon(part, angular, segments);
                result = if result.0.is_empty() {
                    buffered
                } else {
                    result.union(&buffered)
                };
            }
            result
        }
        Geom::Collection(_) => {
            return Err(GeoHaloError::UnsupportedGeometry(
                "collection must be merged before buffering".into(),
            ))
        }
    };
    Ok(result)
}

fn buffer_polygon(
    polygon: &Polygon<PlanarPoint>,
    angular: f64,
    segments: usize,
) -> geo_types::MultiPolygon<f64> {
    let subject: geo_types::Polygon<f64> = polygon.into();
    if angular > 0.0 {
        planar::dilate(&subject, angular, segments)
    } else {
        planar::erode(&subject, -angular, segments)
    }
}

fn contour_capsules(
    contour: &Contour<PlanarPoint>,
    radius: f64,
    segments: usize,
) -> Vec<geo_types::Polygon<f64>> {
    // the conversion appends the explicit closing point for closed contours, so the closing
    // segment is covered as well
    let line: LineString<f64> = contour.into();
    planar::sequence_capsules(&line.0, radius, segments)
}

fn coord(point: &PlanarPoint) -> Coord<f64> {
    coord! { x: point.x, y: point.y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::to_planar;
    use assert_matches::assert_matches;
    use geohalo_types::geo::{Datum, GeoPoint};
    use geohalo_types::impls::GeometryCollection;
    use geohalo_types::latlon;

    fn square(center_lat: f64, center_lon: f64, size: f64) -> Polygon<GeoPosition> {
        let half = size / 2.0;
        Polygon::from(vec![
            latlon!(center_lat - half, center_lon - half),
            latlon!(center_lat - half, center_lon + half),
            latlon!(center_lat + half, center_lon + half),
            latlon!(center_lat + half, center_lon - half),
        ])
    }

    fn area_of(geometry: &Geom<GeoPosition>) -> f64 {
        use geo::Area;
        match to_planar(geometry).expect("planar conversion") {
            Geom::Polygon(p) => {
                let poly: geo_types::Polygon<f64> = (&p).into();
                poly.unsigned_area()
            }
            Geom::MultiPolygon(mp) => {
                let multi: geo_types::MultiPolygon<f64> = (&mp).into();
                multi.unsigned_area()
            }
            other => panic!("expected an areal shape, got {}", other.kind()),
        }
    }

    #[test]
    fn point_buffer_matches_great_circle_radius() {
        let result = buffer(&Geom::Point(latlon!(0.0, 0.0)), 1000.0).expect("buffered");
        let Geom::Polygon(polygon) = &result else {
            panic!("expected a polygon, got {}", result.kind());
        };

        let points = &polygon.outer_contour.points;
        let n = points.len() as f64;
        let center_lat = points.iter().map(|p| p.lat()).sum::<f64>() / n;
        let center_lon = points.iter().map(|p| p.lon()).sum::<f64>() / n;
        assert!(center_lat.abs() < 1e-6);
        assert!(center_lon.abs() < 1e-6);

        let expected = (1000.0 / Datum::WGS84.mean_radius()).to_degrees();
        let radius = points
            .iter()
            .map(|p| {
                let (dx, dy) = (p.lon() - center_lon, p.lat() - center_lat);
                (dx * dx + dy * dy).sqrt()
            })
            .fold(0.0, f64::max);
        assert!(
            (radius - expected).abs() / expected < 0.05,
            "radius {radius}, expected {expected}"
        );
    }

    #[test]
    fn zero_distance_returns_the_shape_unchanged() {
        let polygon = Geom::Polygon(square(10.0, 20.0, 1.0));
        assert_eq!(buffer(&polygon, 0.0), Some(polygon));
    }

    #[test]
    fn buffer_area_grows_with_distance() {
        let polygon = Geom::Polygon(square(10.0, 20.0, 1.0));
        let small = buffer(&polygon, 1000.0).expect("small buffer");
        let large = buffer(&polygon, 2000.0).expect("large buffer");

        let original = area_of(&polygon);
        let small_area = area_of(&small);
        let large_area = area_of(&large);
        assert!(small_area > original);
        assert!(large_area >= small_area);
    }

    #[test]
    fn negative_buffer_shrinks_the_polygon() {
        let polygon = Geom::Polygon(square(0.0, 0.0, 1.0));
        let shrunk = buffer(&polygon, -1000.0).expect("eroded");
        assert!(area_of(&shrunk) < area_of(&polygon));
    }

    #[test]
    fn erosion_past_the_minimum_width_returns_none() {
        // ~1.1 km wide square cannot survive a 5 km inward buffer
        let polygon = Geom::Polygon(square(0.0, 0.0, 0.01));
        assert_eq!(buffer(&polygon, -5000.0), None);
    }

    #[test]
    fn negative_distance_on_a_line_returns_none() {
        let line = Geom::Contour(Contour::open(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]));
        assert_eq!(buffer(&line, -100.0), None);
    }

    #[test]
    fn closed_contour_buffers_to_an_annulus() {
        let ring = Geom::Contour(Contour::closed(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
            latlon!(1.0, 0.0),
        ]));
        let result = buffer(&ring, 1000.0).expect("buffered");
        let Geom::Polygon(polygon) = &result else {
            panic!("expected a polygon, got {}", result.kind());
        };
        assert_eq!(polygon.inner_contours.len(), 1);
    }

    #[test]
    fn group_is_buffered_as_a_whole() {
        let collection = Geom::Collection(GeometryCollection::from(vec![
            Geom::Polygon(square(0.0, 0.0, 1.0)),
            Geom::Polygon(square(5.0, 5.0, 1.0)),
        ]));
        let result = buffer(&collection, 1000.0).expect("buffered");
        assert_matches!(&result, Geom::MultiPolygon(mp) if mp.parts().len() == 2);
    }

    #[test]
    fn mixed_group_returns_none() {
        let collection = Geom::Collection(GeometryCollection::from(vec![
            Geom::Point(latlon!(0.0, 0.0)),
            Geom::Polygon(square(0.0, 0.0, 1.0)),
        ]));
        assert_eq!(buffer(&collection, 1000.0), None);
    }

    #[test]
    fn buffer_across_the_antimeridian_splits_in_two() {
        let result = buffer(&Geom::Point(latlon!(0.0, 180.0)), 1000.0).expect("buffered");
        let Geom::MultiPolygon(parts) = &result else {
            panic!("expected a multipolygon, got {}", result.kind());
        };
        assert_eq!(parts.parts().len(), 2);
        for part in parts.parts() {
            for point in &part.outer_contour.points {
                assert!((-180.0..=180.0).contains(&point.lon()));
            }
        }
    }

    #[test]
    fn empty_shape_returns_none() {
        let empty: Geom<GeoPosition> = Geom::Contour(Contour::open(vec![]));
        assert_eq!(buffer(&empty, 1000.0), None);
    }

    #[test]
    fn non_finite_distance_returns_none() {
        let point = Geom::Point(latlon!(0.0, 0.0));
        assert_eq!(buffer(&point, f64::NAN), None);
        assert_eq!(buffer(&point, f64::INFINITY), None);
    }
}
