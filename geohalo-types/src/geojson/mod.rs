//! Conversion between geographic shapes and GeoJSON geometry objects.
//!
//! Positions use the GeoJSON `[lon, lat]` order with an optional third altitude element. Polygon
//! rings are closed explicitly on the way out; the duplicated closing position is stripped on the
//! way in (contours never store it).

use geojson::{LineStringType, PointType, PolygonType, Value};

use crate::error::ShapeError;
use crate::geo::{AltitudeReference, GeoPoint, GeoPosition};
use crate::geometry::Geom;
use crate::impls::{
    ClosedContour, Contour, GeometryCollection, MultiContour, MultiPoint, MultiPolygon, Polygon,
};

fn position_from(value: &PointType) -> Result<GeoPosition, ShapeError> {
    if value.len() < 2 {
        return Err(ShapeError::Conversion(
            "position must have at least two values".into(),
        ));
    }
    Ok(GeoPosition::new(
        value[1],
        value[0],
        value.get(2).copied().unwrap_or(0.0),
        AltitudeReference::default(),
    ))
}

fn position_to(position: &GeoPosition) -> PointType {
    if position.altitude() == 0.0 {
        vec![position.lon(), position.lat()]
    } else {
        vec![position.lon(), position.lat(), position.altitude()]
    }
}

fn contour_from(line_string: &LineStringType) -> Result<Contour<GeoPosition>, ShapeError> {
    let is_closed = line_string.len() > 1 && line_string.first() == line_string.last();
    let positions = if is_closed {
        &line_string[..line_string.len() - 1]
    } else {
        &line_string[..]
    };
    Ok(Contour::new(
        positions
            .iter()
            .map(position_from)
            .collect::<Result<Vec<_>, _>>()?,
        is_closed,
    ))
}

fn contour_to(contour: &Contour<GeoPosition>) -> LineStringType {
    contour.iter_points_closing().map(position_to).collect()
}

fn ring_from(line_string: &LineStringType) -> Result<ClosedContour<GeoPosition>, ShapeError> {
    contour_from(line_string)?
        .into_closed()
        .ok_or_else(|| ShapeError::Conversion("polygon ring is not closed".into()))
}

fn ring_to(ring: &ClosedContour<GeoPosition>) -> LineStringType {
    let mut positions: LineStringType = ring.points.iter().map(position_to).collect();
    if let Some(first) = positions.first().cloned() {
        positions.push(first);
    }
    positions
}

fn polygon_from(rings: &PolygonType) -> Result<Polygon<GeoPosition>, ShapeError> {
    let mut rings_iter = rings.iter();
    let outer = rings_iter
        .next()
        .ok_or_else(|| ShapeError::Conversion("polygon must have an outer ring".into()))?;
    Ok(Polygon::new(
        ring_from(outer)?,
        rings_iter.map(ring_from).collect::<Result<Vec<_>, _>>()?,
    ))
}

fn polygon_to(polygon: &Polygon<GeoPosition>) -> PolygonType {
    polygon.iter_contours().map(ring_to).collect()
}

impl TryFrom<&geojson::Geometry> for Geom<GeoPosition> {
    type Error = ShapeError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Point(p) => Ok(Geom::Point(position_from(p)?)),
            Value::MultiPoint(points) => Ok(Geom::MultiPoint(MultiPoint::from(
                points
                    .iter()
                    .map(position_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            Value::LineString(line) => Ok(Geom::Contour(contour_from(line)?)),
            Value::MultiLineString(lines) => Ok(Geom::MultiContour(MultiContour::from(
                lines
                    .iter()
                    .map(contour_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            Value::Polygon(rings) => Ok(Geom::Polygon(polygon_from(rings)?)),
            Value::MultiPolygon(polygons) => Ok(Geom::MultiPolygon(MultiPolygon::from(
                polygons
                    .iter()
                    .map(polygon_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            Value::GeometryCollection(members) => Ok(Geom::Collection(GeometryCollection::from(
                members
                    .iter()
                    .map(Geom::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
        }
    }
}

impl From<&Geom<GeoPosition>> for geojson::Geometry {
    fn from(value: &Geom<GeoPosition>) -> Self {
        let value = match value {
            Geom::Point(p) => Value::Point(position_to(p)),
            Geom::MultiPoint(v) => Value::MultiPoint(v.points().iter().map(position_to).collect()),
            Geom::Contour(v) => Value::LineString(contour_to(v)),
            Geom::MultiContour(v) => {
                Value::MultiLineString(v.contours().iter().map(contour_to).collect())
            }
            Geom::Polygon(v) => Value::Polygon(polygon_to(v)),
            Geom::MultiPolygon(v) => {
                Value::MultiPolygon(v.parts().iter().map(polygon_to).collect())
            }
            Geom::Collection(v) => Value::GeometryCollection(
                v.geometries().iter().map(geojson::Geometry::from).collect(),
            ),
        };
        geojson::Geometry::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;

    #[test]
    fn point_uses_lon_lat_order() {
        let geometry = geojson::Geometry::new(Value::Point(vec![37.61, 55.75]));
        let geom = Geom::try_from(&geometry).expect("valid point");
        assert_eq!(geom, Geom::Point(latlon!(55.75, 37.61)));

        let back = geojson::Geometry::from(&geom);
        assert_eq!(back.value, Value::Point(vec![37.61, 55.75]));
    }

    #[test]
    fn altitude_is_the_third_element() {
        let geometry = geojson::Geometry::new(Value::Point(vec![10.0, 20.0, 555.0]));
        let geom = Geom::try_from(&geometry).expect("valid point");
        let Geom::Point(position) = &geom else {
            panic!("expected a point");
        };
        assert_eq!(position.altitude(), 555.0);
        assert_eq!(
            geojson::Geometry::from(&geom).value,
            Value::Point(vec![10.0, 20.0, 555.0])
        );
    }

    #[test]
    fn polygon_rings_are_closed_explicitly() {
        let rings = vec![vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![10.0, 10.0],
            vec![0.0, 0.0],
        ]];
        let geometry = geojson::Geometry::new(Value::Polygon(rings.clone()));
        let geom = Geom::try_from(&geometry).expect("valid polygon");
        let Geom::Polygon(polygon) = &geom else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.outer_contour.points.len(), 3);

        assert_eq!(
            geojson::Geometry::from(&geom).value,
            Value::Polygon(rings)
        );
    }

    #[test]
    fn unclosed_ring_is_rejected() {
        let rings = vec![vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0]]];
        let geometry = geojson::Geometry::new(Value::Polygon(rings));
        assert!(Geom::try_from(&geometry).is_err());
    }

    #[test]
    fn collection_converts_member_wise() {
        let geometry = geojson::Geometry::new(Value::GeometryCollection(vec![
            geojson::Geometry::new(Value::Point(vec![1.0, 2.0])),
            geojson::Geometry::new(Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])),
        ]));
        let geom = Geom::try_from(&geometry).expect("valid collection");
        let Geom::Collection(collection) = &geom else {
            panic!("expected a collection");
        };
        assert_eq!(collection.geometries().len(), 2);
        assert_eq!(geojson::Geometry::from(&geom).value, geometry.value);
    }
}
