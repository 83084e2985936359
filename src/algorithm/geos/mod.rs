//! Named native operations.
//!
//! The operation structs in [`ops`] plug into a
//! [`Dispatcher`](crate::algorithm::dispatch::Dispatcher). The traits re-exported here
//! apply them with the default dispatcher: elementwise for a [`GeometryArray`] and
//! directly for a single [`Geometry`].
//!
//! [`GeometryArray`]: crate::array::GeometryArray
//! [`Geometry`]: crate::geometry::Geometry

/// Implements a unary trait for arrays, and for single values unless `array_only`.
macro_rules! unary_trait {
    (@trait $(#[$attr:meta])* $trait_:ident, $method:ident, $op:ty) => {
        $(#[$attr])*
        pub trait $trait_ {
            type Output;

            fn $method(&self) -> Self::Output;
        }

        impl $trait_ for $crate::array::GeometryArray {
            type Output = $crate::error::Result<
                <<$op as $crate::algorithm::dispatch::UnaryOp>::Output as $crate::algorithm::dispatch::OpOutput>::Array,
            >;

            fn $method(&self) -> Self::Output {
                $crate::algorithm::dispatch::Dispatcher::default()
                    .apply_unary(&<$op>::default(), self)
            }
        }
    };
    ($(#[$attr:meta])* $trait_:ident, $method:ident, $op:ty) => {
        unary_trait!(@trait $(#[$attr])* $trait_, $method, $op);

        impl $trait_ for $crate::geometry::Geometry {
            type Output = $crate::error::Result<
                <<$op as $crate::algorithm::dispatch::UnaryOp>::Output as $crate::algorithm::dispatch::OpOutput>::Element,
            >;

            fn $method(&self) -> Self::Output {
                $crate::algorithm::geos::ops::call_unary(&<$op>::default(), self)
            }
        }
    };
    ($(#[$attr:meta])* $trait_:ident, $method:ident, $op:ty, array_only) => {
        unary_trait!(@trait $(#[$attr])* $trait_, $method, $op);
    };
}

/// Implements a binary trait for every pairing of arrays and single values.
macro_rules! binary_trait {
    (@array $trait_:ident, $method:ident, $op:ty, $lhs:ty, $rhs:ty) => {
        impl $trait_<$rhs> for $lhs {
            type Output = $crate::error::Result<
                <<$op as $crate::algorithm::dispatch::BinaryOp>::Output as $crate::algorithm::dispatch::OpOutput>::Array,
            >;

            fn $method(&self, other: &$rhs) -> Self::Output {
                $crate::algorithm::dispatch::Dispatcher::default()
                    .apply_binary(&<$op>::default(), self, other)
            }
        }
    };
    ($(#[$attr:meta])* $trait_:ident, $method:ident, $op:ty) => {
        $(#[$attr])*
        pub trait $trait_<Rhs = Self> {
            type Output;

            fn $method(&self, other: &Rhs) -> Self::Output;
        }

        binary_trait!(@array $trait_, $method, $op, $crate::array::GeometryArray, $crate::array::GeometryArray);
        binary_trait!(@array $trait_, $method, $op, $crate::array::GeometryArray, $crate::geometry::Geometry);
        binary_trait!(@array $trait_, $method, $op, $crate::geometry::Geometry, $crate::array::GeometryArray);

        impl $trait_ for $crate::geometry::Geometry {
            type Output = $crate::error::Result<
                <<$op as $crate::algorithm::dispatch::BinaryOp>::Output as $crate::algorithm::dispatch::OpOutput>::Element,
            >;

            fn $method(&self, other: &Self) -> Self::Output {
                $crate::algorithm::geos::ops::call_binary(&<$op>::default(), self, other)
            }
        }
    };
}

mod area;
mod buffer;
mod collect;
mod constructive;
mod distance;
mod is_valid;
mod length;
pub mod ops;
mod overlay;
mod predicates;
mod relate;

pub use area::Area;
pub use buffer::Buffer;
pub use collect::collect;
pub use constructive::{Boundary, Centroid, ConvexHull, Envelope, Simplify, UnaryUnion};
pub use distance::{Distance, HausdorffDistance};
pub use is_valid::IsValid;
pub use length::Length;
pub use overlay::{Difference, Intersection, SymmetricDifference, Union};
pub use predicates::{HasZ, IsClosed, IsEmpty, IsRing, IsSimple};
pub use relate::{
    Contains, CoveredBy, Covers, Crosses, Disjoint, Equals, EqualsExact, Intersects, Overlaps,
    Touches, Within,
};
