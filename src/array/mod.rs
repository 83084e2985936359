//! N-dimensional arrays of geometry values.

mod arrow;

pub use arrow::{to_arrow_boolean, to_arrow_float64};

use ndarray::{Array1, ArrayD, ArrayViewD, IxDyn};

use crate::error::Result;
use crate::geometry::Geometry;
use crate::kind::GeometryKind;

/// An ordered, fixed-shape array of geometry values.
///
/// `None` marks a missing element, which is distinct from an empty geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryArray(ArrayD<Option<Geometry>>);

impl GeometryArray {
    pub fn new(values: ArrayD<Option<Geometry>>) -> Self {
        Self(values)
    }

    /// A one-dimensional array.
    pub fn from_vec(values: Vec<Option<Geometry>>) -> Self {
        Self(Array1::from_vec(values).into_dyn())
    }

    /// An array of the given shape, filled from `values` in row-major order.
    pub fn from_shape_vec(shape: &[usize], values: Vec<Option<Geometry>>) -> Result<Self> {
        Ok(Self(ArrayD::from_shape_vec(IxDyn(shape), values)?))
    }

    /// The same elements in a new shape.
    pub fn into_shape(self, shape: &[usize]) -> Result<Self> {
        let values = if self.0.is_standard_layout() {
            self.0
        } else {
            self.0.as_standard_layout().into_owned()
        };
        Ok(Self(values.into_shape(IxDyn(shape))?))
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn ndim(&self) -> usize {
        self.0.ndim()
    }

    /// The number of elements, including missing ones.
    ///
    /// Elementwise emptiness is [`IsEmpty`](crate::algorithm::geos::IsEmpty).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|value| value.is_none()).count()
    }

    /// The value at `index`, or `None` when it is missing or out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&Geometry> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Geometry>> + '_ {
        self.0.iter().map(Option::as_ref)
    }

    /// The kind of every element.
    pub fn kinds(&self) -> ArrayD<Option<GeometryKind>> {
        self.0.map(|value| value.as_ref().map(Geometry::kind))
    }

    pub fn view(&self) -> ArrayViewD<'_, Option<Geometry>> {
        self.0.view()
    }

    pub fn as_array(&self) -> &ArrayD<Option<Geometry>> {
        &self.0
    }

    pub fn into_inner(self) -> ArrayD<Option<Geometry>> {
        self.0
    }
}

impl From<ArrayD<Option<Geometry>>> for GeometryArray {
    fn from(value: ArrayD<Option<Geometry>>) -> Self {
        Self(value)
    }
}

impl From<Vec<Option<Geometry>>> for GeometryArray {
    fn from(value: Vec<Option<Geometry>>) -> Self {
        Self::from_vec(value)
    }
}

impl From<Vec<Geometry>> for GeometryArray {
    fn from(value: Vec<Geometry>) -> Self {
        Self::from_vec(value.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<Geometry>> for GeometryArray {
    fn from_iter<T: IntoIterator<Item = Option<Geometry>>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
