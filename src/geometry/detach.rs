//! Owned copies of geometries borrowed from inside another native geometry.
//!
//! Rings and members are handed out by GEOS as borrowed views into their parent. To
//! become values of their own they are rebuilt as independent native resources.

use geos::{CoordSeq, Geom, GeometryTypes};

use crate::kind::{Coord, GeometryKind};

type GResult<T> = std::result::Result<T, geos::Error>;

/// Build an independent native geometry with the same structure as `geom`.
pub(crate) fn detach<G: Geom>(geom: &G) -> GResult<geos::Geometry> {
    let kind = GeometryKind::from_geos(geom.geometry_type()).ok_or_else(|| {
        geos::Error::GenericError("Unknown native geometry type".to_string())
    })?;

    if geom.is_empty()? {
        return crate::empty::native_empty(kind);
    }

    match kind {
        GeometryKind::Point => geos::Geometry::create_point(geom.get_coord_seq()?),
        GeometryKind::LineString => geos::Geometry::create_line_string(geom.get_coord_seq()?),
        GeometryKind::LinearRing => geos::Geometry::create_linear_ring(geom.get_coord_seq()?),
        GeometryKind::Polygon => {
            let mut interiors = rings(geom)?;
            let exterior = interiors.remove(0);
            geos::Geometry::create_polygon(exterior, interiors)
        }
        GeometryKind::MultiPoint => geos::Geometry::create_multipoint(members(geom)?),
        GeometryKind::MultiLineString => {
            geos::Geometry::create_multiline_string(members(geom)?)
        }
        GeometryKind::MultiPolygon => geos::Geometry::create_multipolygon(members(geom)?),
        GeometryKind::GeometryCollection => {
            geos::Geometry::create_geometry_collection(members(geom)?)
        }
    }
}

/// Detached copies of every member of a multi geometry or collection.
pub(crate) fn members<G: Geom>(geom: &G) -> GResult<Vec<geos::Geometry>> {
    (0..geom.get_num_geometries()?)
        .map(|i| detach(&geom.get_geometry_n(i)?))
        .collect()
}

/// Detached copies of the rings of a non-empty polygon, exterior first.
pub(crate) fn rings<G: Geom>(geom: &G) -> GResult<Vec<geos::Geometry>> {
    let mut out = Vec::with_capacity(geom.get_num_interior_rings()? + 1);
    out.push(detach(&geom.get_exterior_ring()?)?);
    for i in 0..geom.get_num_interior_rings()? {
        let ring = geom.get_interior_ring_n(i.try_into().map_err(|_| {
            geos::Error::GenericError("Interior ring index overflow".to_string())
        })?)?;
        out.push(detach(&ring)?);
    }
    Ok(out)
}

/// The coordinates of a point, line string or linear ring.
pub(crate) fn coords<G: Geom>(geom: &G) -> GResult<Vec<Coord>> {
    let num_coords = geom.get_num_coordinates()?;
    if num_coords == 0 {
        return Ok(vec![]);
    }

    let seq = geom.get_coord_seq()?;
    let has_z = geom.has_z()?;
    (0..num_coords)
        .map(|i| {
            Ok(Coord {
                x: seq.get_x(i)?,
                y: seq.get_y(i)?,
                z: if has_z { Some(seq.get_z(i)?) } else { None },
            })
        })
        .collect()
}

/// A native coordinate sequence holding `coords`.
///
/// The sequence is 3D if any coordinate carries Z; missing Z values become NaN.
pub(crate) fn coord_seq(coords: &[Coord]) -> GResult<CoordSeq> {
    let has_z = coords.iter().any(|c| c.z.is_some());
    let dims = if has_z {
        geos::CoordDimensions::ThreeD
    } else {
        geos::CoordDimensions::TwoD
    };
    let size = coords
        .len()
        .try_into()
        .map_err(|_| geos::Error::GenericError("Too many coordinates".to_string()))?;

    let mut seq = CoordSeq::new(size, dims)?;
    for (i, coord) in coords.iter().enumerate() {
        seq.set_x(i, coord.x)?;
        seq.set_y(i, coord.y)?;
        if has_z {
            seq.set_z(i, coord.z.unwrap_or(f64::NAN))?;
        }
    }
    Ok(seq)
}

/// Whether two native geometries have the same type, the same nesting and the same
/// coordinates, Z included, in the same order.
pub(crate) fn same_structure<L: Geom, R: Geom>(left: &L, right: &R) -> GResult<bool> {
    if left.geometry_type() != right.geometry_type() || left.has_z()? != right.has_z()? {
        return Ok(false);
    }
    match (left.is_empty()?, right.is_empty()?) {
        (true, true) => return Ok(true),
        (false, false) => (),
        _ => return Ok(false),
    }

    match left.geometry_type() {
        GeometryTypes::Point | GeometryTypes::LineString | GeometryTypes::LinearRing => {
            Ok(coords(left)? == coords(right)?)
        }
        GeometryTypes::Polygon => {
            let num_interiors = left.get_num_interior_rings()?;
            if num_interiors != right.get_num_interior_rings()?
                || !same_structure(&left.get_exterior_ring()?, &right.get_exterior_ring()?)?
            {
                return Ok(false);
            }
            for i in 0..num_interiors {
                let n = i.try_into().map_err(|_| {
                    geos::Error::GenericError("Interior ring index overflow".to_string())
                })?;
                let (l, r) = (left.get_interior_ring_n(n)?, right.get_interior_ring_n(n)?);
                if !same_structure(&l, &r)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => {
            let num_geoms = left.get_num_geometries()?;
            if num_geoms != right.get_num_geometries()? {
                return Ok(false);
            }
            for i in 0..num_geoms {
                if !same_structure(&left.get_geometry_n(i)?, &right.get_geometry_n(i)?)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

pub(crate) fn topological_dimension<G: Geom>(geom: &G) -> GResult<usize> {
    let dim = match geom.geometry_type() {
        GeometryTypes::Point | GeometryTypes::MultiPoint => 0,
        GeometryTypes::LineString | GeometryTypes::LinearRing | GeometryTypes::MultiLineString => 1,
        GeometryTypes::Polygon | GeometryTypes::MultiPolygon => 2,
        _ => {
            let mut max = 0;
            for i in 0..geom.get_num_geometries()? {
                max = max.max(topological_dimension(&geom.get_geometry_n(i)?)?);
            }
            max
        }
    };
    Ok(dim)
}
