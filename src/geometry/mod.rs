//! The immutable geometry value.
//!
//! [`Geometry`] is a closed enum with one variant per [`GeometryKind`]. Each variant
//! holds a payload that owns a [`Handle`]; payloads carry the behavior that only makes
//! sense for their kind (rings of a polygon, members of a collection). Values are only
//! ever produced by [`registry::wrap`](crate::registry::wrap), so the variant always
//! matches the kind the native engine reports for the resource.

/// Payload types shared by every kind.
macro_rules! impl_payload {
    ($name:ident) => {
        #[derive(Clone)]
        pub struct $name(pub(crate) $crate::handle::Handle);

        impl $name {
            pub fn handle(&self) -> &$crate::handle::Handle {
                &self.0
            }

            pub fn native(&self) -> &geos::Geometry {
                self.0.native()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
}

pub(crate) use impl_payload;

mod constructors;
pub(crate) mod detach;
mod linestring;
mod multi;
mod point;
mod polygon;

use std::fmt;
use std::hash::{Hash, Hasher};

use geos::Geom;

use crate::error::Result;
use crate::handle::Handle;
use crate::kind::GeometryKind;
use crate::registry;

pub use linestring::{LineString, LinearRing};
pub use multi::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

/// A geometry value backed by a native resource.
#[derive(Clone)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Wrap a geometry returned by the native engine.
    ///
    /// This is the public entry to the single construction path: the kind is read from
    /// the resource and empties are canonicalized before the value is built.
    pub fn from_native(geom: geos::Geometry) -> Result<Self> {
        registry::wrap(Handle::acquire(geom))
    }

    pub(crate) fn try_from_native(
        result: std::result::Result<geos::Geometry, geos::Error>,
    ) -> Result<Self> {
        registry::wrap(Handle::try_acquire(result)?)
    }

    /// The handle owning this value's native resource.
    pub fn handle(&self) -> &Handle {
        match self {
            Geometry::Point(g) => g.handle(),
            Geometry::LineString(g) => g.handle(),
            Geometry::LinearRing(g) => g.handle(),
            Geometry::Polygon(g) => g.handle(),
            Geometry::MultiPoint(g) => g.handle(),
            Geometry::MultiLineString(g) => g.handle(),
            Geometry::MultiPolygon(g) => g.handle(),
            Geometry::GeometryCollection(g) => g.handle(),
        }
    }

    /// Borrow the native geometry.
    pub fn native(&self) -> &geos::Geometry {
        self.handle().native()
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::LinearRing(_) => GeometryKind::LinearRing,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Whether the native engine reports this geometry as empty.
    ///
    /// Queried on every call; a native failure reads as non-empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.native().is_empty(), Ok(true))
    }

    /// Whether the coordinates carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self.native().has_z(), Ok(true))
    }

    /// Topological dimension: 0 for points, 1 for lines, 2 for areas.
    ///
    /// Collections report the highest dimension among their members, and 0 when empty.
    pub fn dimension(&self) -> Result<usize> {
        Ok(detach::topological_dimension(self.native())?)
    }

    /// The total number of coordinates.
    pub fn num_coordinates(&self) -> Result<usize> {
        Ok(self.native().get_num_coordinates()?)
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_linear_ring(&self) -> Option<&LinearRing> {
        match self {
            Geometry::LinearRing(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Geometry::MultiPoint(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Geometry::MultiLineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self {
            Geometry::GeometryCollection(g) => Some(g),
            _ => None,
        }
    }

    /// Members of a multi geometry or collection; `None` for single kinds.
    pub fn geoms(&self) -> Option<Result<Vec<Geometry>>> {
        match self {
            Geometry::MultiPoint(g) => Some(g.geoms()),
            Geometry::MultiLineString(g) => Some(g.geoms()),
            Geometry::MultiPolygon(g) => Some(g.geoms()),
            Geometry::GeometryCollection(g) => Some(g.geoms()),
            _ => None,
        }
    }
}

/// Exact structural equality: same kind, same coordinate dimension and the same
/// coordinates, Z included, in the same order.
impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        if self.handle().ptr_eq(other.handle()) {
            return true;
        }
        if self.kind() != other.kind() || self.has_z() != other.has_z() {
            return false;
        }
        matches!(detach::same_structure(self.native(), other.native()), Ok(true))
    }
}

impl Eq for Geometry {}

impl Hash for Geometry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.has_z().hash(state);
        let empty = self.is_empty();
        empty.hash(state);
        if !empty {
            self.num_coordinates().unwrap_or(0).hash(state);
            if self.kind().is_multi() {
                self.native().get_num_geometries().unwrap_or(0).hash(state);
            }
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wkt() {
            Ok(wkt) => f.write_str(&wkt),
            Err(_) => write!(f, "{} <unprintable>", self.kind()),
        }
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geometry({self})")
    }
}
