//! Codecs: well-known binary and text, and conversion from `geo-types`.

pub mod geo;
pub mod wkb;
pub mod wkt;
