//! Conversion of one-dimensional results to Arrow arrays.

use arrow_array::{BooleanArray, Float64Array};
use ndarray::ArrayD;

/// A boolean Arrow array of `values` in row-major order; missing elements become nulls.
pub fn to_arrow_boolean(values: &ArrayD<Option<bool>>) -> BooleanArray {
    values.iter().copied().collect()
}

/// A float Arrow array of `values` in row-major order; missing elements become nulls.
pub fn to_arrow_float64(values: &ArrayD<Option<f64>>) -> Float64Array {
    values.iter().copied().collect()
}
