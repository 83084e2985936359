//! Set-theoretic overlay of two geometries.

use super::ops;

binary_trait!(Intersection, intersection, ops::Intersection);
binary_trait!(Union, union, ops::Union);
binary_trait!(Difference, difference, ops::Difference);
binary_trait!(SymmetricDifference, symmetric_difference, ops::SymmetricDifference);

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::algorithm::geos::Area;
    use crate::array::GeometryArray;
    use crate::geometry::Geometry;
    use crate::kind::GeometryKind;
    use crate::test::unit_square;

    fn shifted() -> Geometry {
        Geometry::polygon(&[(0.5, 0.), (1.5, 0.), (1.5, 1.), (0.5, 1.), (0.5, 0.)], &[]).unwrap()
    }

    #[test]
    fn overlay_areas() {
        let square = unit_square();
        assert_relative_eq!(square.intersection(&shifted()).unwrap().area().unwrap(), 0.5);
        assert_relative_eq!(square.union(&shifted()).unwrap().area().unwrap(), 1.5);
        assert_relative_eq!(square.difference(&shifted()).unwrap().area().unwrap(), 0.5);
        assert_relative_eq!(
            square.symmetric_difference(&shifted()).unwrap().area().unwrap(),
            1.
        );
    }

    #[test]
    fn disjoint_intersection_is_an_empty_value() {
        let far = Geometry::polygon(&[(5., 5.), (6., 5.), (6., 6.), (5., 5.)], &[]).unwrap();
        let arr = GeometryArray::from_vec(vec![Some(far), None]);
        let out = arr.intersection(&unit_square()).unwrap();
        let first = out.get(&[0]).unwrap();
        assert!(first.is_empty());
        assert_eq!(first.kind(), GeometryKind::Polygon);
        assert!(out.get(&[1]).is_none());
    }
}
