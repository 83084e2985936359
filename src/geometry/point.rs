use geos::Geom;

use crate::error::Result;
use crate::kind::Coord;

super::impl_payload!(Point);

impl Point {
    /// The x coordinate, or `None` for the empty point.
    pub fn x(&self) -> Result<Option<f64>> {
        Ok(self.coord()?.map(|c| c.x))
    }

    pub fn y(&self) -> Result<Option<f64>> {
        Ok(self.coord()?.map(|c| c.y))
    }

    /// The z coordinate, or `None` when the point is empty or 2D.
    pub fn z(&self) -> Result<Option<f64>> {
        Ok(self.coord()?.and_then(|c| c.z))
    }

    pub fn coord(&self) -> Result<Option<Coord>> {
        let geom = self.native();
        if geom.is_empty()? {
            return Ok(None);
        }
        let z = if geom.has_z()? {
            Some(geom.get_z()?)
        } else {
            None
        };
        Ok(Some(Coord {
            x: geom.get_x()?,
            y: geom.get_y()?,
            z,
        }))
    }
}
