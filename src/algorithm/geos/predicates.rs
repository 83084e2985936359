//! Unary predicates.

use super::ops;

unary_trait!(
    /// Whether each element is empty. Single values use [`Geometry::is_empty`].
    ///
    /// [`Geometry::is_empty`]: crate::geometry::Geometry::is_empty
    IsEmpty,
    is_empty,
    ops::IsEmpty,
    array_only
);

unary_trait!(
    /// Whether each element carries Z coordinates. Single values use
    /// [`Geometry::has_z`].
    ///
    /// [`Geometry::has_z`]: crate::geometry::Geometry::has_z
    HasZ,
    has_z,
    ops::HasZ,
    array_only
);

unary_trait!(IsSimple, is_simple, ops::IsSimple);

unary_trait!(IsRing, is_ring, ops::IsRing);

unary_trait!(
    /// Whether a linear geometry's endpoints coincide.
    ///
    /// The native engine rejects other kinds, so this fails per element for them.
    IsClosed,
    is_closed,
    ops::IsClosed
);
