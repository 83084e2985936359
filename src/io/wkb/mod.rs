//! Well-known binary.
//!
//! Encoding and decoding are done by the native engine, with one exception: the empty
//! point. OGC WKB has no representation for it, so it is written as a point whose
//! coordinates are all NaN, the convention shared by PostGIS and GDAL:
//!
//! ```text
//! 01 01000000 000000000000F87F 000000000000F87F
//! ```
//!
//! Any point with only NaN ordinates, 2D or Z, in either byte order, with or without an
//! extended-WKB SRID, decodes to the empty point.

mod api;
mod common;
mod point;

pub use api::{from_wkb, from_wkb_array, to_wkb, to_wkb_array};
pub use common::{Endianness, WKBType};
