//! Handling of shapes that cross the ±180° longitude line.
//!
//! Buffering and overlay math cannot work across the longitude seam: a polygon authored as
//! `[175, -175]` would otherwise read as wrapping almost all the way around the globe. The
//! operations here work in the planar degree space and come in two directions:
//!
//! * [`join`] rewrites coordinates into a single continuous shape that may extend beyond ±180 —
//!   the form planar math requires;
//! * [`normalize`] cuts shapes back into parts that each stay within `[-180, 180]`.
//!
//! Cutting a polygon goes through the 2d overlay engine, so the `z` coordinate of cut polygon
//! parts is reset to zero. Contours are split segment-wise and keep their `z` values, with the
//! seam point interpolated.

use geo::{Area, BooleanOps};
use geo_types::coord;
use geohalo_types::cartesian::{PlanarPoint, Rect};
use geohalo_types::geo::wrap_longitude;
use geohalo_types::geometry::Geom;
use geohalo_types::impls::{ClosedContour, Contour, GeometryCollection, Polygon};

/// Minimum area in square degrees for a cut piece to count as a part. Anything below this is a
/// sliver from a shape touching the seam without crossing it.
const MIN_PART_AREA: f64 = 1e-10;

/// Joins a shape across the longitude seam: consecutive points never jump more than 180°, so the
/// result is continuous but may extend beyond ±180. Point coordinates are wrapped into range.
pub fn join(geometry: &Geom<PlanarPoint>) -> Geom<PlanarPoint> {
    match geometry {
        Geom::Point(p) => Geom::Point(wrap_point(p)),
        Geom::MultiPoint(v) => {
            Geom::MultiPoint(v.points().iter().map(wrap_point).collect::<Vec<_>>().into())
        }
        Geom::Contour(c) => Geom::Contour(join_contour(c)),
        Geom::MultiContour(v) => Geom::MultiContour(
            v.contours()
                .iter()
                .map(join_contour)
                .collect::<Vec<_>>()
                .into(),
        ),
        Geom::Polygon(p) => Geom::Polygon(join_polygon(p)),
        Geom::MultiPolygon(v) => Geom::MultiPolygon(
            v.parts()
                .iter()
                .map(join_polygon)
                .collect::<Vec<_>>()
                .into(),
        ),
        Geom::Collection(v) => Geom::Collection(GeometryCollection::from(
            v.geometries().iter().map(join).collect::<Vec<_>>(),
        )),
    }
}

/// Cuts a shape into parts that each stay within `[-180, 180]` longitude.
///
/// A contour or polygon crossing the seam once becomes a two-part multi-shape; a shape that does
/// not cross (touching ±180 exactly included) is returned unchanged, so the operation is
/// idempotent.
pub fn normalize(geometry: &Geom<PlanarPoint>) -> Geom<PlanarPoint> {
    match geometry {
        Geom::Point(p) => Geom::Point(wrap_point(p)),
        Geom::MultiPoint(v) => {
            Geom::MultiPoint(v.points().iter().map(wrap_point).collect::<Vec<_>>().into())
        }
        Geom::Contour(c) => {
            let mut parts = split_contour(c);
            if parts.len() == 1 {
                Geom::Contour(parts.remove(0))
            } else {
                Geom::MultiContour(parts.into())
            }
        }
        Geom::MultiContour(v) => Geom::MultiContour(
            v.contours()
                .iter()
                .flat_map(split_contour)
                .collect::<Vec<_>>()
                .into(),
        ),
        Geom::Polygon(p) => {
            let mut parts = split_polygon(p);
            if parts.len() == 1 {
                Geom::Polygon(parts.remove(0))
            } else {
                Geom::MultiPolygon(parts.into())
            }
        }
        Geom::MultiPolygon(v) => Geom::MultiPolygon(
            v.parts()
                .iter()
                .flat_map(split_polygon)
                .collect::<Vec<_>>()
                .into(),
        ),
        Geom::Collection(v) => Geom::Collection(GeometryCollection::from(
            v.geometries().iter().map(normalize).collect::<Vec<_>>(),
        )),
    }
}

fn wrap_point(point: &PlanarPoint) -> PlanarPoint {
    PlanarPoint::new(wrap_longitude(point.x), point.y, point.z)
}

fn in_range(x: f64) -> bool {
    (-180.0..=180.0).contains(&x)
}

/// Rewrites x coordinates so that consecutive points never jump more than 180. The first point is
/// wrapped into `[-180, 180]`; the rest follow it.
fn unwrap_points(points: &[PlanarPoint]) -> Vec<PlanarPoint> {
    let mut out = Vec::with_capacity(points.len());
    let mut prev_x: Option<f64> = None;
    for p in points {
        let x = match prev_x {
            None => wrap_longitude(p.x),
            Some(prev) => {
                let mut x = p.x;
                while x - prev > 180.0 {
                    x -= 360.0;
                }
                while prev - x > 180.0 {
                    x += 360.0;
                }
                x
            }
        };
        out.push(PlanarPoint::new(x, p.y, p.z));
        prev_x = Some(x);
    }
    out
}

fn join_contour(contour: &Contour<PlanarPoint>) -> Contour<PlanarPoint> {
    Contour::new(unwrap_points(contour.points()), contour.is_closed())
}

/// Joins all rings of a polygon. Holes are additionally shifted by whole turns so they stay with
/// the outer ring rather than with the wrapped range.
fn join_polygon(polygon: &Polygon<PlanarPoint>) -> Polygon<PlanarPoint> {
    let outer_points = unwrap_points(&polygon.outer_contour.points);
    let outer_center_x = Rect::from_points(outer_points.iter())
        .map(|r| r.center().x)
        .unwrap_or(0.0);

    let inner_contours = polygon
        .inner_contours
        .iter()
        .map(|hole| {
            let points = unwrap_points(&hole.points);
            let shift = Rect::from_points(points.iter())
                .map(|r| ((outer_center_x - r.center().x) / 360.0).round() * 360.0)
                .unwrap_or(0.0);
            ClosedContour::new(
                points
                    .into_iter()
                    .map(|p| PlanarPoint::new(p.x + shift, p.y, p.z))
                    .collect(),
            )
        })
        .collect();

    Polygon::new(ClosedContour::new(outer_points), inner_contours)
}

/// Splits a contour at the longitude seam. A closed contour is cut through its closing segment as
/// well; the parts of a cut ring are open contours running from seam to seam.
fn split_contour(contour: &Contour<PlanarPoint>) -> Vec<Contour<PlanarPoint>> {
    if contour.points().is_empty() {
        return vec![contour.clone()];
    }

    let joined = if contour.is_closed() {
        let with_closing: Vec<PlanarPoint> = contour.iter_points_closing().copied().collect();
        unwrap_points(&with_closing)
    } else {
        unwrap_points(contour.points())
    };

    let mut parts: Vec<Vec<PlanarPoint>> = Vec::new();
    let mut current: Vec<PlanarPoint> = Vec::new();
    let mut offset = 0.0_f64;

    let mut points = joined.iter().copied();
    let Some(first) = points.next() else {
        return vec![contour.clone()];
    };
    current.push(first);
    let mut prev = first;

    for q in points {
        loop {
            let east = 180.0 - offset;
            let west = -180.0 - offset;
            let seam = if q.x > east {
                east
            } else if q.x < west {
                west
            } else {
                break;
            };

            let t = (seam - prev.x) / (q.x - prev.x);
            let cut = PlanarPoint::new(
                seam,
                prev.y + (q.y - prev.y) * t,
                prev.z + (q.z - prev.z) * t,
            );
            let emitted = PlanarPoint::new(cut.x + offset, cut.y, cut.z);
            if current.last() != Some(&emitted) {
                current.push(emitted);
            }
            parts.push(std::mem::take(&mut current));

            offset += if seam == east { -360.0 } else { 360.0 };
            current.push(PlanarPoint::new(cut.x + offset, cut.y, cut.z));
            prev = cut;
        }
        current.push(PlanarPoint::new(q.x + offset, q.y, q.z));
        prev = q;
    }
    parts.push(current);

    if parts.len() == 1 {
        return if contour.points().iter().all(|p| in_range(p.x)) {
            vec![contour.clone()]
        } else {
            // no seam crossing, but the coordinates needed wrapping into range
            let mut points = parts.remove(0);
            if contour.is_closed() {
                points.pop();
                vec![Contour::closed(points)]
            } else {
                vec![Contour::open(points)]
            }
        };
    }

    // A ring enters and leaves the seam, so its traversal ends in the part it started in: glue
    // the last part back onto the first one.
    if contour.is_closed() {
        let last = parts.pop().unwrap_or_default();
        if !parts.is_empty() {
            let head = parts.remove(0);
            let mut merged = last;
            if merged.last() == head.first() {
                merged.extend(head.into_iter().skip(1));
            } else {
                merged.extend(head);
            }
            parts.insert(0, merged);
        } else {
            parts.push(last);
        }
    }

    parts.retain(|p| p.len() >= 2);
    if parts.is_empty() {
        return vec![contour.clone()];
    }
    parts.into_iter().map(Contour::open).collect()
}

/// Cuts a polygon into parts within `[-180, 180]` by clipping the joined ring against 360°-wide
/// longitude bands and shifting each band's pieces back into range.
fn split_polygon(polygon: &Polygon<PlanarPoint>) -> Vec<Polygon<PlanarPoint>> {
    let joined = join_polygon(polygon);
    let Some(rect) = Rect::from_points(joined.outer_contour.points.iter()) else {
        return vec![polygon.clone()];
    };

    if rect.x_min >= -180.0 && rect.x_max <= 180.0 {
        let original_in_range = polygon
            .iter_contours()
            .all(|c| c.points.iter().all(|p| in_range(p.x)));
        return if original_in_range {
            vec![polygon.clone()]
        } else {
            vec![joined]
        };
    }

    let subject: geo_types::Polygon<f64> = (&joined).into();
    let k_min = ((rect.x_min + 180.0) / 360.0).floor() as i64;
    let k_max = ((rect.x_max + 180.0) / 360.0).floor() as i64;

    let mut parts = Vec::new();
    for k in k_min..=k_max {
        let west = -180.0 + 360.0 * k as f64;
        let east = west + 360.0;
        let band = geo_types::Polygon::new(
            geo_types::LineString::new(vec![
                coord! { x: west, y: rect.y_min - 1.0 },
                coord! { x: east, y: rect.y_min - 1.0 },
                coord! { x: east, y: rect.y_max + 1.0 },
                coord! { x: west, y: rect.y_max + 1.0 },
                coord! { x: west, y: rect.y_min - 1.0 },
            ]),
            vec![],
        );

        for piece in subject.intersection(&band).0 {
            if piece.unsigned_area() <= MIN_PART_AREA {
                continue;
            }
            let shift = -360.0 * k as f64;
            let part: Polygon<PlanarPoint> = (&piece).into();
            // clip points on the band edge may carry rounding noise; snap them onto the seam
            parts.push(
                part.cast_points(|p| {
                    PlanarPoint::new((p.x + shift).clamp(-180.0, 180.0), p.y, p.z)
                })
                .oriented(),
            );
        }
    }

    if parts.is_empty() {
        vec![polygon.clone()]
    } else {
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geo::Area;

    fn planar(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint::new(x, y, 0.0)
    }

    fn seam_polygon() -> Polygon<PlanarPoint> {
        // 10°-wide strip crossing the seam, authored within valid longitude range
        Polygon::from(vec![
            planar(175.0, 0.0),
            planar(-175.0, 0.0),
            planar(-175.0, 10.0),
            planar(175.0, 10.0),
        ])
    }

    #[test]
    fn line_crossing_once_splits_in_two() {
        let line = Geom::Contour(Contour::open(vec![planar(179.0, 0.0), planar(-179.0, 2.0)]));
        let normalized = normalize(&line);

        let Geom::MultiContour(parts) = &normalized else {
            panic!("expected a multicontour, got {}", normalized.kind());
        };
        assert_eq!(parts.contours().len(), 2);
        assert_eq!(
            parts.contours()[0].points(),
            &[planar(179.0, 0.0), planar(180.0, 1.0)]
        );
        assert_eq!(
            parts.contours()[1].points(),
            &[planar(-180.0, 1.0), planar(-179.0, 2.0)]
        );
    }

    #[test]
    fn line_not_crossing_stays_single() {
        let line = Geom::Contour(Contour::open(vec![planar(170.0, 0.0), planar(175.0, 1.0)]));
        assert_eq!(normalize(&line), line);
    }

    #[test]
    fn line_touching_the_seam_is_not_split() {
        let line = Geom::Contour(Contour::open(vec![
            planar(175.0, 0.0),
            planar(180.0, 0.0),
            planar(175.0, 5.0),
        ]));
        assert_eq!(normalize(&line), line);
    }

    #[test]
    fn ring_crossing_the_seam_yields_two_parts() {
        let ring = Geom::Contour(Contour::closed(vec![
            planar(175.0, 0.0),
            planar(-175.0, 0.0),
            planar(-175.0, 10.0),
            planar(175.0, 10.0),
        ]));
        let normalized = normalize(&ring);
        assert_matches!(&normalized, Geom::MultiContour(parts) if parts.contours().len() == 2);
    }

    #[test]
    fn polygon_crossing_once_splits_in_exactly_two() {
        let polygon = Geom::Polygon(seam_polygon());
        let normalized = normalize(&polygon);

        let Geom::MultiPolygon(parts) = &normalized else {
            panic!("expected a multipolygon, got {}", normalized.kind());
        };
        assert_eq!(parts.parts().len(), 2);

        for part in parts.parts() {
            assert!(part
                .outer_contour
                .points
                .iter()
                .all(|p| in_range(p.x)));
            let as_geo: geo_types::Polygon<f64> = part.into();
            assert_abs_diff_eq!(as_geo.unsigned_area(), 50.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let polygon = Geom::Polygon(seam_polygon());
        let once = normalize(&polygon);
        let twice = normalize(&once);
        assert_eq!(once, twice);

        let line = Geom::Contour(Contour::open(vec![planar(179.0, 0.0), planar(-179.0, 2.0)]));
        let once = normalize(&line);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn points_are_wrapped_into_range() {
        let point = Geom::Point(planar(190.0, 10.0));
        assert_eq!(normalize(&point), Geom::Point(planar(-170.0, 10.0)));
    }

    #[test]
    fn join_makes_seam_crossing_continuous() {
        let joined = join(&Geom::Polygon(seam_polygon()));
        let Geom::Polygon(polygon) = &joined else {
            panic!("expected a polygon");
        };
        let xs: Vec<f64> = polygon.outer_contour.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![175.0, 185.0, 185.0, 175.0]);
    }
}
