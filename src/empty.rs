//! Canonical empty geometries.
//!
//! Every kind has its own zero-content native form: an empty polygon is a GEOS empty
//! polygon, never an empty collection standing in for one. [`canonicalize`] runs on
//! every construction and replaces empties whose native form is not canonical (members
//! that are themselves empty, a Z dimension) with the canonical empty of the same kind.

use geos::{CoordDimensions, CoordSeq, Geom};
use tracing::debug;

use crate::error::{GeoshapeError, Result};
use crate::handle::Handle;
use crate::kind::GeometryKind;

/// Build the canonical native empty geometry of `kind`.
pub fn empty_native(kind: GeometryKind) -> Result<geos::Geometry> {
    native_empty(kind)
        .map_err(|err| GeoshapeError::Construction(format!("Empty {kind} geometry: {err}")))
}

pub(crate) fn native_empty(
    kind: GeometryKind,
) -> std::result::Result<geos::Geometry, geos::Error> {
    match kind {
        GeometryKind::Point => geos::Geometry::create_empty_point(),
        GeometryKind::LineString => geos::Geometry::create_empty_line_string(),
        GeometryKind::LinearRing => {
            geos::Geometry::create_linear_ring(CoordSeq::new(0, CoordDimensions::TwoD)?)
        }
        GeometryKind::Polygon => geos::Geometry::create_empty_polygon(),
        GeometryKind::MultiPoint
        | GeometryKind::MultiLineString
        | GeometryKind::MultiPolygon
        | GeometryKind::GeometryCollection => {
            geos::Geometry::create_empty_collection(kind.to_geos())
        }
    }
}

/// Whether an empty native geometry already has the canonical form for `kind`.
fn is_canonical_empty(geom: &geos::Geometry, kind: GeometryKind) -> Result<bool> {
    if geom.has_z()? {
        return Ok(false);
    }
    if kind.is_multi() {
        return Ok(geom.get_num_geometries()? == 0);
    }
    Ok(true)
}

/// Apply the empty-geometry policy to a freshly acquired handle of `kind`.
///
/// Non-empty resources are returned unchanged. The kind is never altered.
pub(crate) fn canonicalize(handle: Handle, kind: GeometryKind) -> Result<Handle> {
    let geom = handle.native();
    if !geom.is_empty()? || is_canonical_empty(geom, kind)? {
        return Ok(handle);
    }

    debug!(%kind, "replacing non-canonical empty geometry");
    Ok(Handle::acquire(empty_native(kind)?))
}
