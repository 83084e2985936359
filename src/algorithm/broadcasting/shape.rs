use ndarray::{ArrayViewD, IxDyn};

use crate::error::{GeoshapeError, Result};

/// The shape that every operand shape broadcasts to.
///
/// Shapes are right-aligned; two dimensions are compatible when they are equal or one of
/// them is 1. Operands with fewer dimensions are treated as having leading 1s.
pub fn broadcast_shapes(shapes: &[&[usize]]) -> Result<Vec<usize>> {
    let ndim = shapes.iter().map(|shape| shape.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for (axis, dim) in out.iter_mut().enumerate() {
        let offset = ndim - axis;
        for shape in shapes {
            if shape.len() < offset {
                continue;
            }
            let d = shape[shape.len() - offset];
            if d == *dim || d == 1 {
                continue;
            }
            if *dim == 1 {
                *dim = d;
            } else {
                return Err(shape_mismatch(shapes));
            }
        }
    }
    Ok(out)
}

fn shape_mismatch(shapes: &[&[usize]]) -> GeoshapeError {
    GeoshapeError::ShapeMismatch {
        shapes: shapes.iter().map(|shape| shape.to_vec()).collect(),
    }
}

/// A read-only view of `view` repeated along its size-1 dimensions to `shape`.
pub(crate) fn broadcast_view<'v, T>(
    view: &'v ArrayViewD<'_, T>,
    shape: &[usize],
) -> Result<ArrayViewD<'v, T>> {
    view.broadcast(IxDyn(shape))
        .ok_or_else(|| shape_mismatch(&[view.shape(), shape]))
}

/// The multi-index of the `flat`-th element of an array of `shape` in row-major order.
pub(crate) fn unravel_index(mut flat: usize, shape: &[usize]) -> Vec<usize> {
    let mut index = vec![0; shape.len()];
    for (axis, dim) in shape.iter().enumerate().rev() {
        if *dim == 0 {
            continue;
        }
        index[axis] = flat % dim;
        flat /= dim;
    }
    index
}
