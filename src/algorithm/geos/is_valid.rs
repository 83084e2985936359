use super::ops;

unary_trait!(
    /// Checks if the geometry is valid
    IsValid,
    is_valid,
    ops::IsValid
);
