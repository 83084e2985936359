//! Vectorized algorithms over geometry values and arrays.

pub mod broadcasting;
pub mod dispatch;
pub mod geos;
