use super::ops;

unary_trait!(
    /// Length of a linear geometry, or perimeter of an areal one.
    Length,
    length,
    ops::Length
);
