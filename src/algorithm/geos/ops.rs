//! Operation structs, one per native entry point.
//!
//! Each struct is passed to a [`Dispatcher`](crate::algorithm::dispatch::Dispatcher)
//! method. Parameterized operations carry their fixed options as fields.

use geos::Geom;

use crate::algorithm::dispatch::{BinaryOp, NaryOp, OpOutput, ParamOp, UnaryOp};
use crate::error::Result;
use crate::geometry::Geometry;

macro_rules! unary_op {
    ($(#[$attr:meta])* $name:ident, $label:literal, $output:ty, |$geom:ident| $body:block) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl UnaryOp for $name {
            type Output = $output;

            fn name(&self) -> &'static str {
                $label
            }

            fn call(&self, $geom: &geos::Geometry) -> Result<$output> $body
        }
    };
}

macro_rules! binary_op {
    ($(#[$attr:meta])* $name:ident, $label:literal, $output:ty, |$left:ident, $right:ident| $body:block) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl BinaryOp for $name {
            type Output = $output;

            fn name(&self) -> &'static str {
                $label
            }

            fn call(&self, $left: &geos::Geometry, $right: &geos::Geometry) -> Result<$output> $body
        }
    };
}

unary_op!(IsEmpty, "is_empty", bool, |geom| { Ok(geom.is_empty()?) });
unary_op!(IsValid, "is_valid", bool, |geom| { Ok(geom.is_valid()) });
unary_op!(IsSimple, "is_simple", bool, |geom| { Ok(geom.is_simple()?) });
unary_op!(IsRing, "is_ring", bool, |geom| { Ok(geom.is_ring()?) });
unary_op!(
    /// Whether a line string's endpoints coincide. Fails for non-linear kinds.
    IsClosed,
    "is_closed",
    bool,
    |geom| { Ok(geom.is_closed()?) }
);
unary_op!(HasZ, "has_z", bool, |geom| { Ok(geom.has_z()?) });

unary_op!(Area, "area", f64, |geom| { Ok(geom.area()?) });
unary_op!(Length, "length", f64, |geom| { Ok(geom.length()?) });

unary_op!(Centroid, "centroid", geos::Geometry, |geom| {
    Ok(geom.get_centroid()?)
});
unary_op!(ConvexHull, "convex_hull", geos::Geometry, |geom| {
    Ok(geom.convex_hull()?)
});
unary_op!(Envelope, "envelope", geos::Geometry, |geom| {
    Ok(geom.envelope()?)
});
unary_op!(Boundary, "boundary", geos::Geometry, |geom| {
    Ok(geom.boundary()?)
});
unary_op!(UnaryUnion, "unary_union", geos::Geometry, |geom| {
    Ok(geom.unary_union()?)
});

binary_op!(Contains, "contains", bool, |left, right| { Ok(left.contains(right)?) });
binary_op!(Intersects, "intersects", bool, |left, right| { Ok(left.intersects(right)?) });
binary_op!(Within, "within", bool, |left, right| { Ok(left.within(right)?) });
binary_op!(Touches, "touches", bool, |left, right| { Ok(left.touches(right)?) });
binary_op!(Crosses, "crosses", bool, |left, right| { Ok(left.crosses(right)?) });
binary_op!(Overlaps, "overlaps", bool, |left, right| { Ok(left.overlaps(right)?) });
binary_op!(Disjoint, "disjoint", bool, |left, right| { Ok(left.disjoint(right)?) });
binary_op!(Covers, "covers", bool, |left, right| { Ok(left.covers(right)?) });
binary_op!(CoveredBy, "covered_by", bool, |left, right| { Ok(left.covered_by(right)?) });
binary_op!(
    /// Topological equality: the same point set, regardless of vertex order.
    Equals,
    "equals",
    bool,
    |left, right| { Ok(left.equals(right)?) }
);

binary_op!(Distance, "distance", f64, |left, right| { Ok(left.distance(right)?) });
binary_op!(HausdorffDistance, "hausdorff_distance", f64, |left, right| {
    Ok(left.hausdorff_distance(right)?)
});

binary_op!(Intersection, "intersection", geos::Geometry, |left, right| {
    Ok(left.intersection(right)?)
});
binary_op!(Union, "union", geos::Geometry, |left, right| {
    Ok(left.union(right)?)
});
binary_op!(Difference, "difference", geos::Geometry, |left, right| {
    Ok(left.difference(right)?)
});
binary_op!(SymmetricDifference, "symmetric_difference", geos::Geometry, |left, right| {
    Ok(left.sym_difference(right)?)
});

/// Vertex-by-vertex equality within `tolerance`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualsExact {
    pub tolerance: f64,
}

impl BinaryOp for EqualsExact {
    type Output = bool;

    fn name(&self) -> &'static str {
        "equals_exact"
    }

    fn call(&self, left: &geos::Geometry, right: &geos::Geometry) -> Result<bool> {
        Ok(left.equals_exact(right, self.tolerance)?)
    }
}

/// Buffer by a per-element width.
#[derive(Debug, Clone, Copy)]
pub struct Buffer {
    /// Segments used to approximate a quarter circle.
    pub quadsegs: i32,
}

impl Default for Buffer {
    fn default() -> Self {
        Self { quadsegs: 8 }
    }
}

impl ParamOp<f64> for Buffer {
    type Output = geos::Geometry;

    fn name(&self) -> &'static str {
        "buffer"
    }

    fn call(&self, geom: &geos::Geometry, width: &f64) -> Result<geos::Geometry> {
        Ok(geom.buffer(*width, self.quadsegs)?)
    }
}

/// Simplify with a per-element tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplify {
    /// Keep the result topologically valid.
    pub preserve_topology: bool,
}

impl ParamOp<f64> for Simplify {
    type Output = geos::Geometry;

    fn name(&self) -> &'static str {
        "simplify"
    }

    fn call(&self, geom: &geos::Geometry, tolerance: &f64) -> Result<geos::Geometry> {
        if self.preserve_topology {
            Ok(geom.topology_preserve_simplify(*tolerance)?)
        } else {
            Ok(geom.simplify(*tolerance)?)
        }
    }
}

/// Gather the operands at each position into a geometry collection.
///
/// A collection whose members are all empty is canonicalized to the member-less
/// `GEOMETRYCOLLECTION EMPTY`, so empty operands do not survive as members.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collect;

impl NaryOp for Collect {
    type Output = geos::Geometry;

    fn name(&self) -> &'static str {
        "collect"
    }

    fn call(&self, geoms: &[&geos::Geometry]) -> Result<geos::Geometry> {
        let members = geoms.iter().map(|geom| Clone::clone(*geom)).collect();
        Ok(geos::Geometry::create_geometry_collection(members)?)
    }
}

/// Evaluate a unary operation on one value, outside any dispatcher.
pub(crate) fn call_unary<Op: UnaryOp>(
    op: &Op,
    geom: &Geometry,
) -> Result<<Op::Output as OpOutput>::Element> {
    op.call(geom.native())?.finish()
}

pub(crate) fn call_binary<Op: BinaryOp>(
    op: &Op,
    left: &Geometry,
    right: &Geometry,
) -> Result<<Op::Output as OpOutput>::Element> {
    op.call(left.native(), right.native())?.finish()
}

pub(crate) fn call_with_param<P, Op: ParamOp<P>>(
    op: &Op,
    geom: &Geometry,
    param: &P,
) -> Result<<Op::Output as OpOutput>::Element> {
    op.call(geom.native(), param)?.finish()
}
