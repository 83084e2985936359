use crate::algorithm::dispatch::Dispatcher;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::geometry::Geometry;

use super::ops;

/// Buffer every geometry by `width`, approximating quarter circles with `quadsegs`
/// segments.
///
/// Per-element widths go through
/// [`Dispatcher::apply_with_param`] with [`ops::Buffer`].
pub trait Buffer {
    type Output;

    fn buffer(&self, width: f64, quadsegs: i32) -> Result<Self::Output>;
}

impl Buffer for GeometryArray {
    type Output = GeometryArray;

    fn buffer(&self, width: f64, quadsegs: i32) -> Result<Self::Output> {
        Dispatcher::default().apply_with_param(&ops::Buffer { quadsegs }, self, width)
    }
}

impl Buffer for Geometry {
    type Output = Geometry;

    fn buffer(&self, width: f64, quadsegs: i32) -> Result<Self::Output> {
        ops::call_with_param(&ops::Buffer { quadsegs }, self, &width)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::algorithm::geos::Area;
    use crate::kind::GeometryKind;
    use crate::test::point_array;

    #[test]
    fn point_buffer() {
        let arr = point_array();
        let buffered = arr.buffer(1., 8).unwrap();
        assert_eq!(buffered.shape(), &[3]);
        for geom in buffered.iter() {
            assert_eq!(geom.unwrap().kind(), GeometryKind::Polygon);
        }
    }

    #[test]
    fn widths_per_element() {
        let arr = point_array();
        let buffered = Dispatcher::default()
            .apply_with_param(&ops::Buffer::default(), &arr, vec![1., 2., 0.])
            .unwrap();
        let areas = buffered.area().unwrap();
        assert!(areas[[0]].unwrap() < areas[[1]].unwrap());
        // Zero width collapses a point to an empty polygon.
        assert!(buffered.get(&[2]).unwrap().is_empty());
        assert_eq!(buffered.get(&[2]).unwrap().kind(), GeometryKind::Polygon);
    }

    #[test]
    fn circle_area() {
        let circle = Geometry::point(0., 0.).unwrap().buffer(1., 64).unwrap();
        assert_relative_eq!(circle.area().unwrap(), std::f64::consts::PI, epsilon = 1e-2);
    }
}
