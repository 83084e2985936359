//! The type registry: recovers a concrete [`Geometry`] variant from an opaque native
//! resource.
//!
//! [`wrap`] is the only function that builds a [`Geometry`]. Constructors, codec
//! decoding, member accessors and dispatch outputs all go through it.

use geos::Geom;
use tracing::trace;

use crate::empty::canonicalize;
use crate::error::{GeoshapeError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::handle::Handle;
use crate::kind::GeometryKind;

type Constructor = fn(Handle) -> Geometry;

macro_rules! constructor {
    ($fn_name:ident, $variant:ident) => {
        fn $fn_name(handle: Handle) -> Geometry {
            Geometry::$variant($variant(handle))
        }
    };
}

constructor!(point, Point);
constructor!(line_string, LineString);
constructor!(linear_ring, LinearRing);
constructor!(polygon, Polygon);
constructor!(multi_point, MultiPoint);
constructor!(multi_line_string, MultiLineString);
constructor!(multi_polygon, MultiPolygon);
constructor!(geometry_collection, GeometryCollection);

/// Variant constructors indexed by GEOS type id.
static REGISTRY: [(GeometryKind, Constructor); 8] = [
    (GeometryKind::Point, point),
    (GeometryKind::LineString, line_string),
    (GeometryKind::LinearRing, linear_ring),
    (GeometryKind::Polygon, polygon),
    (GeometryKind::MultiPoint, multi_point),
    (GeometryKind::MultiLineString, multi_line_string),
    (GeometryKind::MultiPolygon, multi_polygon),
    (GeometryKind::GeometryCollection, geometry_collection),
];

fn constructor_for(kind: GeometryKind) -> Constructor {
    let (registered, constructor) = REGISTRY[i32::from(kind) as usize];
    debug_assert_eq!(registered, kind);
    constructor
}

/// Ask the native engine which kind of geometry a handle holds.
pub fn classify(handle: &Handle) -> Result<GeometryKind> {
    let geometry_type = handle.native().geometry_type();
    GeometryKind::from_geos(geometry_type).ok_or_else(|| {
        GeoshapeError::Construction(format!(
            "Unsupported native geometry type {geometry_type:?}"
        ))
    })
}

/// Build the typed value for a handle: classify, canonicalize emptiness, construct.
pub fn wrap(handle: Handle) -> Result<Geometry> {
    let kind = classify(&handle)?;
    let handle = canonicalize(handle, kind)?;
    let geometry = constructor_for(kind)(handle);
    check_invariant(&geometry);
    trace!(%kind, "wrapped native geometry");
    Ok(geometry)
}

/// Panics if a value's declared kind disagrees with its native resource.
///
/// Reaching the panic means a value was built outside [`wrap`].
pub(crate) fn check_invariant(geometry: &Geometry) {
    let reported = GeometryKind::from_geos(geometry.native().geometry_type());
    if reported != Some(geometry.kind()) {
        panic!(
            "Invariant violation: value declares {} but its native resource reports {:?}",
            geometry.kind(),
            reported
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry_is_ordered_by_type_id() {
        for kind in GeometryKind::ALL {
            assert_eq!(REGISTRY[i32::from(kind) as usize].0, kind);
        }
    }

    #[test]
    fn wrap_agrees_with_classify() {
        for wkt in [
            "POINT (1 2)",
            "LINESTRING (0 0, 1 1)",
            "LINEARRING (0 0, 1 0, 1 1, 0 0)",
            "POLYGON ((0 0, 1 0, 1 1, 0 0))",
            "MULTIPOINT ((0 0), (1 1))",
            "MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))",
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)))",
            "GEOMETRYCOLLECTION (POINT (0 0))",
            "POLYGON EMPTY",
        ] {
            let handle = Handle::acquire(geos::Geometry::new_from_wkt(wkt).unwrap());
            let classified = classify(&handle).unwrap();
            let geom = wrap(handle).unwrap();
            assert_eq!(geom.kind(), classified, "{wkt}");
        }
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn mismatched_payload_is_fatal() {
        let handle = Handle::acquire(geos::Geometry::new_from_wkt("POINT (1 2)").unwrap());
        let forged = Geometry::Polygon(Polygon(handle));
        check_invariant(&forged);
    }
}
