//! Safe, immutable geometry values backed by the GEOS engine, with numpy-style
//! broadcasting of native operations over N-dimensional arrays of them.
//!
//! ```
//! use geoshape::algorithm::geos::Contains;
//! use geoshape::{Geometry, GeometryArray};
//!
//! let region = Geometry::polygon(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)], &[])?;
//! let points = GeometryArray::from_vec(vec![
//!     Some(Geometry::point(0.5, 0.5)?),
//!     None,
//!     Some(Geometry::point(2.0, 2.0)?),
//! ]);
//!
//! let inside = region.contains(&points)?;
//! assert_eq!(inside.iter().copied().collect::<Vec<_>>(), vec![Some(true), None, Some(false)]);
//! # Ok::<(), geoshape::error::GeoshapeError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::broadcasting::Broadcastable;
pub use algorithm::dispatch::{DispatchConfig, Dispatcher, ErrorPolicy};
pub use array::GeometryArray;
pub use geometry::Geometry;
pub use handle::{Handle, WeakHandle};
pub use kind::{Coord, GeometryKind};

pub mod algorithm;
pub mod array;
pub mod empty;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod io;
pub mod kind;
pub mod registry;
#[cfg(test)]
pub(crate) mod test;
