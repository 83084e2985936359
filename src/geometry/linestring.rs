use geos::Geom;

use crate::error::Result;
use crate::kind::Coord;

use super::detach;

super::impl_payload!(LineString);
super::impl_payload!(LinearRing);

macro_rules! impl_curve {
    ($name:ident) => {
        impl $name {
            /// The coordinates in order; empty for the empty geometry.
            pub fn coords(&self) -> Result<Vec<Coord>> {
                Ok(detach::coords(self.native())?)
            }

            pub fn num_points(&self) -> Result<usize> {
                if self.native().is_empty()? {
                    return Ok(0);
                }
                Ok(self.native().get_num_points()?)
            }

            /// Whether the first and last coordinates coincide. Empty curves are not closed.
            pub fn is_closed(&self) -> Result<bool> {
                if self.native().is_empty()? {
                    return Ok(false);
                }
                Ok(self.native().is_closed()?)
            }
        }
    };
}

impl_curve!(LineString);
impl_curve!(LinearRing);
