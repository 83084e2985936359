//! Constructors for [`Geometry`] values. All of them end in [`registry::wrap`].

use crate::error::{GeoshapeError, Result};
use crate::geometry::detach::coord_seq;
use crate::geometry::Geometry;
use crate::kind::{Coord, GeometryKind};

fn to_coords<C: Into<Coord> + Copy>(coords: &[C]) -> Vec<Coord> {
    coords.iter().map(|c| (*c).into()).collect()
}

fn ring(coords: &[Coord]) -> std::result::Result<geos::Geometry, geos::Error> {
    geos::Geometry::create_linear_ring(coord_seq(coords)?)
}

fn polygon_native<C: Into<Coord> + Copy>(
    shell: &[Coord],
    holes: &[&[C]],
) -> std::result::Result<geos::Geometry, geos::Error> {
    let exterior = ring(shell)?;
    let interiors = holes
        .iter()
        .map(|hole| ring(&to_coords(hole)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    geos::Geometry::create_polygon(exterior, interiors)
}

/// Clone the natives of `members`, rejecting any whose kind is not `expected`.
fn member_natives(
    members: &[Geometry],
    expected: GeometryKind,
    container: GeometryKind,
) -> Result<Vec<geos::Geometry>> {
    members
        .iter()
        .map(|member| {
            if member.kind() != expected {
                return Err(GeoshapeError::InvalidArgument(format!(
                    "{container} members must be {expected}, got {}",
                    member.kind()
                )));
            }
            Ok(member.native().clone())
        })
        .collect()
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Result<Self> {
        Self::point_from_coord(Coord::xy(x, y))
    }

    pub fn point_z(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::point_from_coord(Coord::xyz(x, y, z))
    }

    fn point_from_coord(coord: Coord) -> Result<Self> {
        Self::try_from_native(coord_seq(&[coord]).and_then(geos::Geometry::create_point))
    }

    /// A line string through `coords`. No coordinates gives the empty line string.
    pub fn line_string<C: Into<Coord> + Copy>(coords: &[C]) -> Result<Self> {
        if coords.is_empty() {
            return Self::empty(GeometryKind::LineString);
        }
        let coords = to_coords(coords);
        Self::try_from_native(coord_seq(&coords).and_then(geos::Geometry::create_line_string))
    }

    /// A closed ring through `coords`. The native engine rejects unclosed input.
    pub fn linear_ring<C: Into<Coord> + Copy>(coords: &[C]) -> Result<Self> {
        if coords.is_empty() {
            return Self::empty(GeometryKind::LinearRing);
        }
        Self::try_from_native(ring(&to_coords(coords)))
    }

    /// A polygon from a shell and any number of holes. An empty shell gives the empty
    /// polygon.
    pub fn polygon<C: Into<Coord> + Copy>(shell: &[C], holes: &[&[C]]) -> Result<Self> {
        if shell.is_empty() {
            if !holes.is_empty() {
                return Err(GeoshapeError::InvalidArgument(
                    "A polygon with holes needs a shell".to_string(),
                ));
            }
            return Self::empty(GeometryKind::Polygon);
        }

        Self::try_from_native(polygon_native(&to_coords(shell), holes))
    }

    pub fn multi_point(points: &[Geometry]) -> Result<Self> {
        let members = member_natives(points, GeometryKind::Point, GeometryKind::MultiPoint)?;
        Self::try_from_native(geos::Geometry::create_multipoint(members))
    }

    pub fn multi_line_string(lines: &[Geometry]) -> Result<Self> {
        let members = member_natives(
            lines,
            GeometryKind::LineString,
            GeometryKind::MultiLineString,
        )?;
        Self::try_from_native(geos::Geometry::create_multiline_string(members))
    }

    pub fn multi_polygon(polygons: &[Geometry]) -> Result<Self> {
        let members =
            member_natives(polygons, GeometryKind::Polygon, GeometryKind::MultiPolygon)?;
        Self::try_from_native(geos::Geometry::create_multipolygon(members))
    }

    /// A geometry collection of copies of `geoms`, of any kinds.
    pub fn collection(geoms: &[Geometry]) -> Result<Self> {
        let members = geoms.iter().map(|g| g.native().clone()).collect();
        Self::try_from_native(geos::Geometry::create_geometry_collection(members))
    }

    /// The canonical empty geometry of `kind`.
    pub fn empty(kind: GeometryKind) -> Result<Self> {
        Self::try_from_native(crate::empty::native_empty(kind))
    }
}
