//! Planar buffering primitives over `geo-types` values.
//!
//! A buffer is assembled from discs and capsules: the disc covers everything within the radius of
//! one point, the capsule everything within the radius of one segment. Dilation of a polygon is
//! the union of the polygon with the capsules of its rings (an exact Minkowski sum up to the arc
//! approximation); erosion is the difference instead of the union.

use geo::BooleanOps;
use geo_types::{coord, Coord, LineString, MultiPolygon, Polygon};
use std::f64::consts::PI;

/// Number of segments used to approximate a full circle.
pub(crate) const CIRCLE_SEGMENTS: usize = 32;

/// Circle around `center`, approximated by an inscribed polygon.
pub(crate) fn circle(center: Coord<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let n = segments.max(4);
    let mut ring = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        ring.push(coord! {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        });
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    Polygon::new(LineString::new(ring), vec![])
}

/// Region covering all points within `radius` of the segment `a`-`b`: a rectangle with semicircle
/// caps on both ends.
pub(crate) fn capsule(a: Coord<f64>, b: Coord<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    if (dx * dx + dy * dy).sqrt() < f64::EPSILON {
        return circle(a, radius, segments);
    }

    let direction = dy.atan2(dx);
    let half = (segments / 2).max(2);
    let mut ring = Vec::with_capacity(2 * half + 3);
    for i in 0..=half {
        let angle = direction - PI / 2.0 + PI * i as f64 / half as f64;
        ring.push(coord! {
            x: b.x + radius * angle.cos(),
            y: b.y + radius * angle.sin(),
        });
    }
    for i in 0..=half {
        let angle = direction + PI / 2.0 + PI * i as f64 / half as f64;
        ring.push(coord! {
            x: a.x + radius * angle.cos(),
            y: a.y + radius * angle.sin(),
        });
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    Polygon::new(LineString::new(ring), vec![])
}

/// Capsules covering the neighborhood of a point sequence. The sequence is taken as authored: a
/// ring must carry its explicit closing point for the closing segment to be covered. A single
/// isolated point degrades to a disc.
pub(crate) fn sequence_capsules(
    points: &[Coord<f64>],
    radius: f64,
    segments: usize,
) -> Vec<Polygon<f64>> {
    match points {
        [] => vec![],
        [single] => vec![circle(*single, radius, segments)],
        _ => points
            .windows(2)
            .map(|pair| capsule(pair[0], pair[1], radius, segments))
            .collect(),
    }
}

/// Union of a set of polygons.
pub(crate) fn union_all(polygons: Vec<Polygon<f64>>) -> MultiPolygon<f64> {
    let mut result = MultiPolygon::new(vec![]);
    for polygon in polygons {
        if result.0.is_empty() {
            result = MultiPolygon::new(vec![polygon]);
        } else {
            result = result.union(&MultiPolygon::new(vec![polygon]));
        }
    }
    result
}

/// Minkowski dilation of a polygon by a disc of the given radius.
pub(crate) fn dilate(polygon: &Polygon<f64>, radius: f64, segments: usize) -> MultiPolygon<f64> {
    let capsules = ring_capsules(polygon, radius, segments);
    if capsules.is_empty() {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    MultiPolygon::new(vec![polygon.clone()]).union(&union_all(capsules))
}

/// Erosion of a polygon by a disc of the given radius. The result is empty when the disc does not
/// fit anywhere inside the polygon.
pub(crate) fn erode(polygon: &Polygon<f64>, radius: f64, segments: usize) -> MultiPolygon<f64> {
    let capsules = ring_capsules(polygon, radius, segments);
    if capsules.is_empty() {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    MultiPolygon::new(vec![polygon.clone()]).difference(&union_all(capsules))
}

fn ring_capsules(polygon: &Polygon<f64>, radius: f64, segments: usize) -> Vec<Polygon<f64>> {
    let mut capsules = sequence_capsules(&polygon.exterior().0, radius, segments);
    for ring in polygon.interiors() {
        capsules.extend(sequence_capsules(&ring.0, radius, segments));
    }
    capsules
}
