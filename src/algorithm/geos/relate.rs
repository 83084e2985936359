//! Binary spatial predicates.

use crate::algorithm::dispatch::Dispatcher;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::geometry::Geometry;
use ndarray::ArrayD;

use super::ops;

binary_trait!(
    /// Whether no point of `other` lies in the exterior of `self` and the interiors
    /// intersect.
    Contains,
    contains,
    ops::Contains
);
binary_trait!(Intersects, intersects, ops::Intersects);
binary_trait!(Within, within, ops::Within);
binary_trait!(Touches, touches, ops::Touches);
binary_trait!(Crosses, crosses, ops::Crosses);
binary_trait!(Overlaps, overlaps, ops::Overlaps);
binary_trait!(Disjoint, disjoint, ops::Disjoint);
binary_trait!(Covers, covers, ops::Covers);
binary_trait!(CoveredBy, covered_by, ops::CoveredBy);
binary_trait!(
    /// Topological equality.
    Equals,
    equals,
    ops::Equals
);

/// Vertex-by-vertex equality within a tolerance.
pub trait EqualsExact<Rhs = Self> {
    type Output;

    fn equals_exact(&self, other: &Rhs, tolerance: f64) -> Result<Self::Output>;
}

impl EqualsExact for GeometryArray {
    type Output = ArrayD<Option<bool>>;

    fn equals_exact(&self, other: &Self, tolerance: f64) -> Result<Self::Output> {
        Dispatcher::default().apply_binary(&ops::EqualsExact { tolerance }, self, other)
    }
}

impl EqualsExact<Geometry> for GeometryArray {
    type Output = ArrayD<Option<bool>>;

    fn equals_exact(&self, other: &Geometry, tolerance: f64) -> Result<Self::Output> {
        Dispatcher::default().apply_binary(&ops::EqualsExact { tolerance }, self, other)
    }
}

impl EqualsExact for Geometry {
    type Output = bool;

    fn equals_exact(&self, other: &Self, tolerance: f64) -> Result<Self::Output> {
        ops::call_binary(&ops::EqualsExact { tolerance }, self, other)
    }
}
