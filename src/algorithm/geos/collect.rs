use crate::algorithm::broadcasting::Broadcastable;
use crate::algorithm::dispatch::Dispatcher;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::geometry::Geometry;

use super::ops;

/// Gather the operands at each broadcast position into a geometry collection.
///
/// Positions where every operand is empty yield `GEOMETRYCOLLECTION EMPTY` with no
/// members.
pub fn collect(operands: &[Broadcastable<'_, Geometry>]) -> Result<GeometryArray> {
    Dispatcher::default().apply_nary(&ops::Collect, operands)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kind::GeometryKind;
    use crate::test::{p0, point_array, unit_square};

    #[test]
    fn collect_three_operands() {
        let points = point_array();
        let out = collect(&[
            Broadcastable::from(&points),
            Broadcastable::from(unit_square()),
            Broadcastable::from(p0()),
        ])
        .unwrap();

        assert_eq!(out.shape(), &[3]);
        for geom in out.iter() {
            let geom = geom.unwrap();
            assert_eq!(geom.kind(), GeometryKind::GeometryCollection);
            let members = geom.geoms().unwrap().unwrap();
            assert_eq!(members.len(), 3);
            assert_eq!(members[1], unit_square());
        }
    }

    #[test]
    fn all_empty_operands_collapse() {
        let empty = Geometry::empty(GeometryKind::Point).unwrap();
        let out = collect(&[
            Broadcastable::from(&empty),
            Broadcastable::from(empty.clone()),
        ])
        .unwrap();
        let geom = out.iter().next().unwrap().unwrap();
        assert!(geom.is_empty());
        assert!(geom.geoms().unwrap().unwrap().is_empty());
    }
}
