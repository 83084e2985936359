use ndarray::{aview0, ArrayD, ArrayViewD, CowArray, IxDyn};

use crate::array::GeometryArray;
use crate::geometry::Geometry;

/// An operand of a dispatched operation: a scalar or an N-dimensional array.
///
/// `None` is the missing marker, for scalars and for array elements alike. A scalar has
/// shape `[]` and broadcasts against any shape.
#[derive(Debug, Clone)]
pub enum Broadcastable<'a, T> {
    Scalar(Option<T>),
    Array(CowArray<'a, Option<T>, IxDyn>),
}

impl<'a, T> Broadcastable<'a, T> {
    /// The missing scalar.
    pub fn missing() -> Self {
        Broadcastable::Scalar(None)
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Broadcastable::Scalar(_) => &[],
            Broadcastable::Array(arr) => arr.shape(),
        }
    }

    pub fn view(&self) -> ArrayViewD<'_, Option<T>> {
        match self {
            Broadcastable::Scalar(value) => aview0(value).into_dyn(),
            Broadcastable::Array(arr) => arr.view(),
        }
    }
}

impl<'a, T> From<Option<T>> for Broadcastable<'a, T> {
    fn from(value: Option<T>) -> Self {
        Broadcastable::Scalar(value)
    }
}

impl<'a, T> From<ArrayD<Option<T>>> for Broadcastable<'a, T> {
    fn from(value: ArrayD<Option<T>>) -> Self {
        Broadcastable::Array(value.into())
    }
}

impl<'a, T> From<&'a ArrayD<Option<T>>> for Broadcastable<'a, T> {
    fn from(value: &'a ArrayD<Option<T>>) -> Self {
        Broadcastable::Array(value.view().into())
    }
}

impl<'a, T> From<ArrayViewD<'a, Option<T>>> for Broadcastable<'a, T> {
    fn from(value: ArrayViewD<'a, Option<T>>) -> Self {
        Broadcastable::Array(value.into())
    }
}

impl<'a> From<Geometry> for Broadcastable<'a, Geometry> {
    fn from(value: Geometry) -> Self {
        Broadcastable::Scalar(Some(value))
    }
}

impl<'a> From<&Geometry> for Broadcastable<'a, Geometry> {
    fn from(value: &Geometry) -> Self {
        Broadcastable::Scalar(Some(value.clone()))
    }
}

impl<'a> From<&'a GeometryArray> for Broadcastable<'a, Geometry> {
    fn from(value: &'a GeometryArray) -> Self {
        Broadcastable::Array(value.view().into())
    }
}

impl<'a> From<GeometryArray> for Broadcastable<'a, Geometry> {
    fn from(value: GeometryArray) -> Self {
        Broadcastable::Array(value.into_inner().into())
    }
}

impl<'a> From<f64> for Broadcastable<'a, f64> {
    fn from(value: f64) -> Self {
        Broadcastable::Scalar(Some(value))
    }
}

impl<'a> From<Vec<f64>> for Broadcastable<'a, f64> {
    fn from(value: Vec<f64>) -> Self {
        let values: Vec<_> = value.into_iter().map(Some).collect();
        Broadcastable::Array(ndarray::Array1::from_vec(values).into_dyn().into())
    }
}

impl<'a> From<ArrayD<f64>> for Broadcastable<'a, f64> {
    fn from(value: ArrayD<f64>) -> Self {
        Broadcastable::Array(value.mapv(Some).into())
    }
}
