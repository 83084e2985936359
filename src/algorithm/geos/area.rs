use super::ops;

unary_trait!(
    /// Unsigned planar area of a geometry.
    Area,
    area,
    ops::Area
);
