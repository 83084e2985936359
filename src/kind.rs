//! The closed set of geometry kinds and the coordinate type used by constructors.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// The kind of a geometry, as reported by the native engine.
///
/// The discriminants are GEOS type ids.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum GeometryKind {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

static KINDS_BY_WKT_NAME: phf::Map<&'static str, GeometryKind> = phf_map! {
    "POINT" => GeometryKind::Point,
    "LINESTRING" => GeometryKind::LineString,
    "LINEARRING" => GeometryKind::LinearRing,
    "POLYGON" => GeometryKind::Polygon,
    "MULTIPOINT" => GeometryKind::MultiPoint,
    "MULTILINESTRING" => GeometryKind::MultiLineString,
    "MULTIPOLYGON" => GeometryKind::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryKind::GeometryCollection,
};

impl GeometryKind {
    /// Every kind, in GEOS type id order.
    pub const ALL: [GeometryKind; 8] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::LinearRing,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The upper-case WKT tag for this kind, e.g. `"MULTIPOLYGON"`.
    pub fn wkt_name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::LinearRing => "LINEARRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a kind from its WKT tag. Matching is case-insensitive.
    pub fn from_wkt_name(name: &str) -> Option<Self> {
        KINDS_BY_WKT_NAME
            .get(name.to_ascii_uppercase().as_str())
            .copied()
    }

    /// Whether values of this kind hold member geometries.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon
                | GeometryKind::GeometryCollection
        )
    }

    pub(crate) fn from_geos(value: geos::GeometryTypes) -> Option<Self> {
        match value {
            geos::GeometryTypes::Point => Some(GeometryKind::Point),
            geos::GeometryTypes::LineString => Some(GeometryKind::LineString),
            geos::GeometryTypes::LinearRing => Some(GeometryKind::LinearRing),
            geos::GeometryTypes::Polygon => Some(GeometryKind::Polygon),
            geos::GeometryTypes::MultiPoint => Some(GeometryKind::MultiPoint),
            geos::GeometryTypes::MultiLineString => Some(GeometryKind::MultiLineString),
            geos::GeometryTypes::MultiPolygon => Some(GeometryKind::MultiPolygon),
            geos::GeometryTypes::GeometryCollection => Some(GeometryKind::GeometryCollection),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    pub(crate) fn to_geos(self) -> geos::GeometryTypes {
        match self {
            GeometryKind::Point => geos::GeometryTypes::Point,
            GeometryKind::LineString => geos::GeometryTypes::LineString,
            GeometryKind::LinearRing => geos::GeometryTypes::LinearRing,
            GeometryKind::Polygon => geos::GeometryTypes::Polygon,
            GeometryKind::MultiPoint => geos::GeometryTypes::MultiPoint,
            GeometryKind::MultiLineString => geos::GeometryTypes::MultiLineString,
            GeometryKind::MultiPolygon => geos::GeometryTypes::MultiPolygon,
            GeometryKind::GeometryCollection => geos::GeometryTypes::GeometryCollection,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wkt_name())
    }
}

/// A coordinate passed to or read from the native engine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::xyz(x, y, z)
    }
}

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self::xy(value.x, value.y)
    }
}
