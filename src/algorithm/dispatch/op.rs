use ndarray::ArrayD;

use crate::array::GeometryArray;
use crate::error::Result;
use crate::geometry::Geometry;

/// The raw result of one native call and how it becomes an element of the output.
pub trait OpOutput: Send {
    /// The element type of the output array.
    type Element: Send;
    /// The array type collected from every element.
    type Array;

    fn finish(self) -> Result<Self::Element>;

    fn collect(values: ArrayD<Option<Self::Element>>) -> Self::Array;
}

impl OpOutput for bool {
    type Element = bool;
    type Array = ArrayD<Option<bool>>;

    fn finish(self) -> Result<bool> {
        Ok(self)
    }

    fn collect(values: ArrayD<Option<bool>>) -> Self::Array {
        values
    }
}

impl OpOutput for f64 {
    type Element = f64;
    type Array = ArrayD<Option<f64>>;

    fn finish(self) -> Result<f64> {
        Ok(self)
    }

    fn collect(values: ArrayD<Option<f64>>) -> Self::Array {
        values
    }
}

/// Native geometry results are wrapped through the registry.
impl OpOutput for geos::Geometry {
    type Element = Geometry;
    type Array = GeometryArray;

    fn finish(self) -> Result<Geometry> {
        Geometry::from_native(self)
    }

    fn collect(values: ArrayD<Option<Geometry>>) -> Self::Array {
        GeometryArray::new(values)
    }
}

/// An operation on one geometry.
pub trait UnaryOp: Sync {
    type Output: OpOutput;

    fn name(&self) -> &'static str;

    fn call(&self, geom: &geos::Geometry) -> Result<Self::Output>;
}

/// An operation on two geometries.
pub trait BinaryOp: Sync {
    type Output: OpOutput;

    fn name(&self) -> &'static str;

    fn call(&self, left: &geos::Geometry, right: &geos::Geometry) -> Result<Self::Output>;
}

/// An operation on one geometry and one primitive parameter.
pub trait ParamOp<P>: Sync {
    type Output: OpOutput;

    fn name(&self) -> &'static str;

    fn call(&self, geom: &geos::Geometry, param: &P) -> Result<Self::Output>;
}

/// An operation on any positive number of geometries.
pub trait NaryOp: Sync {
    type Output: OpOutput;

    fn name(&self) -> &'static str;

    fn call(&self, geoms: &[&geos::Geometry]) -> Result<Self::Output>;
}
