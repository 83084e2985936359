use geos::Geom;

use crate::error::Result;
use crate::geometry::Geometry;

use super::detach;

super::impl_payload!(Polygon);

impl Polygon {
    /// The exterior ring as a `LinearRing`, or `None` for the empty polygon.
    pub fn exterior(&self) -> Result<Option<Geometry>> {
        let geom = self.native();
        if geom.is_empty()? {
            return Ok(None);
        }
        let ring = detach::detach(&geom.get_exterior_ring()?)?;
        Ok(Some(Geometry::from_native(ring)?))
    }

    /// The interior rings, in order.
    pub fn interiors(&self) -> Result<Vec<Geometry>> {
        let geom = self.native();
        if geom.is_empty()? {
            return Ok(vec![]);
        }
        detach::rings(geom)?
            .into_iter()
            .skip(1)
            .map(Geometry::from_native)
            .collect()
    }

    pub fn num_interiors(&self) -> Result<usize> {
        if self.native().is_empty()? {
            return Ok(0);
        }
        Ok(self.native().get_num_interior_rings()?)
    }
}
