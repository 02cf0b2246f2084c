//! Conversion between planar shapes and the [`geo-types`](https://docs.rs/geo-types) primitives.
//!
//! These conversions give planar shapes access to the *georust* algorithm ecosystem. Rings are
//! closed explicitly on the way out (the first point repeated at the end, as the OGC
//! `LineString` convention requires) and the duplicate is stripped on the way back in. The `z`
//! coordinate is not representable on the `geo-types` side; converted-back points have `z = 0`.

use geo_types::{Coord, LineString};

use crate::cartesian::PlanarPoint;
use crate::impls::{ClosedContour, Contour, MultiPolygon, Polygon};

fn coord(point: &PlanarPoint) -> Coord<f64> {
    Coord {
        x: point.x,
        y: point.y,
    }
}

fn point(coord: &Coord<f64>) -> PlanarPoint {
    PlanarPoint::new(coord.x, coord.y, 0.0)
}

fn ring_from_line_string(line_string: &LineString<f64>) -> ClosedContour<PlanarPoint> {
    let coords = &line_string.0;
    let coords = match coords.split_last() {
        Some((last, rest)) if !rest.is_empty() && Some(last) == rest.first() => rest,
        _ => coords,
    };
    ClosedContour::new(coords.iter().map(point).collect())
}

impl From<&Contour<PlanarPoint>> for LineString<f64> {
    fn from(value: &Contour<PlanarPoint>) -> Self {
        LineString::new(value.iter_points_closing().map(coord).collect())
    }
}

impl From<&ClosedContour<PlanarPoint>> for LineString<f64> {
    fn from(value: &ClosedContour<PlanarPoint>) -> Self {
        let mut coords: Vec<Coord<f64>> = value.points.iter().map(coord).collect();
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
        LineString::new(coords)
    }
}

impl From<&LineString<f64>> for Contour<PlanarPoint> {
    fn from(value: &LineString<f64>) -> Self {
        let coords = &value.0;
        if coords.len() > 1 && coords.first() == coords.last() {
            Contour::closed(coords[..coords.len() - 1].iter().map(point).collect())
        } else {
            Contour::open(coords.iter().map(point).collect())
        }
    }
}

impl From<&Polygon<PlanarPoint>> for geo_types::Polygon<f64> {
    fn from(value: &Polygon<PlanarPoint>) -> Self {
        geo_types::Polygon::new(
            (&value.outer_contour).into(),
            value.inner_contours.iter().map(Into::into).collect(),
        )
    }
}

impl From<&geo_types::Polygon<f64>> for Polygon<PlanarPoint> {
    fn from(value: &geo_types::Polygon<f64>) -> Self {
        Polygon::new(
            ring_from_line_string(value.exterior()),
            value.interiors().iter().map(ring_from_line_string).collect(),
        )
    }
}

impl From<&MultiPolygon<PlanarPoint>> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon<PlanarPoint>) -> Self {
        geo_types::MultiPolygon::new(value.parts().iter().map(Into::into).collect())
    }
}

impl From<&geo_types::MultiPolygon<f64>> for MultiPolygon<PlanarPoint> {
    fn from(value: &geo_types::MultiPolygon<f64>) -> Self {
        MultiPolygon::from(value.0.iter().map(Into::into).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planar(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint::new(x, y, 0.0)
    }

    #[test]
    fn closed_contour_is_closed_explicitly() {
        let contour = Contour::closed(vec![planar(0.0, 0.0), planar(1.0, 0.0), planar(1.0, 1.0)]);
        let line_string: LineString<f64> = (&contour).into();
        assert_eq!(line_string.0.len(), 4);
        assert_eq!(line_string.0.first(), line_string.0.last());

        let open = Contour::open(vec![planar(0.0, 0.0), planar(1.0, 0.0)]);
        let line_string: LineString<f64> = (&open).into();
        assert_eq!(line_string.0.len(), 2);
    }

    #[test]
    fn polygon_round_trip_preserves_ring_order() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![
                planar(0.0, 0.0),
                planar(10.0, 0.0),
                planar(10.0, 10.0),
                planar(0.0, 10.0),
            ]),
            vec![ClosedContour::new(vec![
                planar(2.0, 2.0),
                planar(4.0, 2.0),
                planar(4.0, 4.0),
                planar(2.0, 4.0),
            ])],
        );

        let converted: geo_types::Polygon<f64> = (&polygon).into();
        assert_eq!(converted.exterior().0.len(), 5);
        assert_eq!(converted.interiors().len(), 1);

        let back: Polygon<PlanarPoint> = (&converted).into();
        assert_eq!(back, polygon);
    }

    #[test]
    fn line_string_closing_point_is_stripped() {
        let line_string = LineString::new(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
        ]);
        let contour: Contour<PlanarPoint> = (&line_string).into();
        assert!(contour.is_closed());
        assert_eq!(contour.points().len(), 3);
    }
}
