//! Operations producing a new geometry from one input.

use crate::algorithm::dispatch::Dispatcher;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::geometry::Geometry;

use super::ops;

unary_trait!(Centroid, centroid, ops::Centroid);
unary_trait!(ConvexHull, convex_hull, ops::ConvexHull);
unary_trait!(
    /// The bounding box of each geometry, as a polygon (or a point when degenerate).
    Envelope,
    envelope,
    ops::Envelope
);
unary_trait!(Boundary, boundary, ops::Boundary);
unary_trait!(UnaryUnion, unary_union, ops::UnaryUnion);

/// Simplify with a distance tolerance, optionally preserving topology.
pub trait Simplify {
    type Output;

    fn simplify(&self, tolerance: f64, preserve_topology: bool) -> Result<Self::Output>;
}

impl Simplify for GeometryArray {
    type Output = GeometryArray;

    fn simplify(&self, tolerance: f64, preserve_topology: bool) -> Result<Self::Output> {
        Dispatcher::default().apply_with_param(
            &ops::Simplify { preserve_topology },
            self,
            tolerance,
        )
    }
}

impl Simplify for Geometry {
    type Output = Geometry;

    fn simplify(&self, tolerance: f64, preserve_topology: bool) -> Result<Self::Output> {
        ops::call_with_param(&ops::Simplify { preserve_topology }, self, &tolerance)
    }
}
