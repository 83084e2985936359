use geos::Geom;

use crate::error::Result;
use crate::geometry::Geometry;

use super::detach;

super::impl_payload!(MultiPoint);
super::impl_payload!(MultiLineString);
super::impl_payload!(MultiPolygon);
super::impl_payload!(GeometryCollection);

macro_rules! impl_members {
    ($name:ident) => {
        impl $name {
            /// Owned copies of the member geometries, in order.
            ///
            /// This is the only way to reach the members: the value itself is not iterable.
            pub fn geoms(&self) -> Result<Vec<Geometry>> {
                detach::members(self.native())?
                    .into_iter()
                    .map(Geometry::from_native)
                    .collect()
            }

            pub fn num_geoms(&self) -> Result<usize> {
                Ok(self.native().get_num_geometries()?)
            }
        }
    };
}

impl_members!(MultiPoint);
impl_members!(MultiLineString);
impl_members!(MultiPolygon);
impl_members!(GeometryCollection);
