use super::ops;

binary_trait!(
    /// Minimum Cartesian distance between two geometries.
    Distance,
    distance,
    ops::Distance
);
binary_trait!(HausdorffDistance, hausdorff_distance, ops::HausdorffDistance);

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Geometry;
    use crate::test::{p1, point_array, unit_square};

    #[test]
    fn point_to_square() {
        assert_relative_eq!(p1().distance(&unit_square()).unwrap(), 2f64.sqrt());
    }

    #[test]
    fn distances_broadcast() {
        let origin = Geometry::point(0., 0.).unwrap();
        let out = point_array().distance(&origin).unwrap();
        assert_relative_eq!(out[[1]].unwrap(), 8f64.sqrt());
    }

    #[test]
    fn hausdorff() {
        let a = Geometry::line_string(&[(0., 0.), (2., 0.)]).unwrap();
        let b = Geometry::line_string(&[(0., 1.), (2., 1.)]).unwrap();
        assert_relative_eq!(a.hausdorff_distance(&b).unwrap(), 1.);
    }
}
