//! Conversion between [`geo_types`] geometries and [`Geometry`] values.

use geo_types::LineString;

use crate::error::{GeoshapeError, Result};
use crate::geometry::Geometry;
use crate::kind::{Coord, GeometryKind};

fn polygon_from_geo(polygon: &geo_types::Polygon<f64>) -> Result<Geometry> {
    let holes: Vec<&[geo_types::Coord<f64>]> =
        polygon.interiors().iter().map(|ring| ring.0.as_slice()).collect();
    Geometry::polygon(&polygon.exterior().0, &holes)
}

fn line_string_from_geo(line: &LineString<f64>) -> Result<Geometry> {
    Geometry::line_string(&line.0)
}

impl TryFrom<&geo_types::Geometry<f64>> for Geometry {
    type Error = GeoshapeError;

    fn try_from(value: &geo_types::Geometry<f64>) -> Result<Self> {
        use geo_types::Geometry as G;

        match value {
            G::Point(point) => Geometry::point(point.x(), point.y()),
            G::Line(line) => Geometry::line_string(&[line.start, line.end]),
            G::LineString(line) => line_string_from_geo(line),
            G::Polygon(polygon) => polygon_from_geo(polygon),
            G::MultiPoint(points) => {
                let members = points
                    .iter()
                    .map(|p| Geometry::point(p.x(), p.y()))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::multi_point(&members)
            }
            G::MultiLineString(lines) => {
                let members = lines
                    .iter()
                    .map(line_string_from_geo)
                    .collect::<Result<Vec<_>>>()?;
                Geometry::multi_line_string(&members)
            }
            G::MultiPolygon(polygons) => {
                let members = polygons
                    .iter()
                    .map(polygon_from_geo)
                    .collect::<Result<Vec<_>>>()?;
                Geometry::multi_polygon(&members)
            }
            G::GeometryCollection(collection) => {
                let members = collection
                    .iter()
                    .map(Geometry::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Geometry::collection(&members)
            }
            G::Rect(rect) => polygon_from_geo(&rect.to_polygon()),
            G::Triangle(triangle) => polygon_from_geo(&triangle.to_polygon()),
        }
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = GeoshapeError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self> {
        Geometry::try_from(&value)
    }
}

fn to_geo_coords(coords: Vec<Coord>) -> Vec<geo_types::Coord<f64>> {
    coords
        .into_iter()
        .map(|c| geo_types::Coord { x: c.x, y: c.y })
        .collect()
}

fn ring_to_geo(ring: &Geometry) -> Result<LineString<f64>> {
    match ring {
        Geometry::LinearRing(ring) => Ok(LineString::new(to_geo_coords(ring.coords()?))),
        Geometry::LineString(line) => Ok(LineString::new(to_geo_coords(line.coords()?))),
        other => Err(unexpected_member(other.kind())),
    }
}

fn polygon_to_geo(geom: &Geometry) -> Result<geo_types::Polygon<f64>> {
    let Some(polygon) = geom.as_polygon() else {
        return Err(unexpected_member(geom.kind()));
    };
    let exterior = match polygon.exterior()? {
        Some(ring) => ring_to_geo(&ring)?,
        None => LineString::new(vec![]),
    };
    let interiors = polygon
        .interiors()?
        .iter()
        .map(ring_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo_types::Polygon::new(exterior, interiors))
}

fn unexpected_member(kind: GeometryKind) -> GeoshapeError {
    GeoshapeError::InvalidArgument(format!("Unexpected member of kind {kind}"))
}

/// Coordinates are 2D in `geo_types`; Z values are dropped.
impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = GeoshapeError;

    fn try_from(value: &Geometry) -> Result<Self> {
        let out: geo_types::Geometry<f64> = match value {
            Geometry::Point(point) => match point.coord()? {
                Some(c) => geo_types::Point::new(c.x, c.y).into(),
                None => {
                    return Err(GeoshapeError::InvalidArgument(
                        "geo-types has no empty point".to_string(),
                    ))
                }
            },
            Geometry::LineString(_) | Geometry::LinearRing(_) => ring_to_geo(value)?.into(),
            Geometry::Polygon(_) => polygon_to_geo(value)?.into(),
            Geometry::MultiPoint(multi) => {
                let points = multi
                    .geoms()?
                    .iter()
                    .map(|member| match geo_types::Geometry::try_from(member)? {
                        geo_types::Geometry::Point(point) => Ok(point),
                        _ => Err(unexpected_member(member.kind())),
                    })
                    .collect::<Result<Vec<_>>>()?;
                geo_types::MultiPoint::new(points).into()
            }
            Geometry::MultiLineString(multi) => {
                let lines = multi
                    .geoms()?
                    .iter()
                    .map(ring_to_geo)
                    .collect::<Result<Vec<_>>>()?;
                geo_types::MultiLineString::new(lines).into()
            }
            Geometry::MultiPolygon(multi) => {
                let polygons = multi
                    .geoms()?
                    .iter()
                    .map(polygon_to_geo)
                    .collect::<Result<Vec<_>>>()?;
                geo_types::MultiPolygon::new(polygons).into()
            }
            Geometry::GeometryCollection(collection) => {
                let members = collection
                    .geoms()?
                    .iter()
                    .map(geo_types::Geometry::try_from)
                    .collect::<Result<Vec<_>>>()?;
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection::new_from(members))
            }
        };
        Ok(out)
    }
}
