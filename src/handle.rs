//! Ownership of native geometry resources.
//!
//! A [`Handle`] owns exactly one `geos::Geometry`. Cloning a handle shares the resource
//! through an atomic reference count; the native memory is released by the wrapped
//! geometry's destructor when the last owner is dropped, and nowhere else.
//!
//! Native references borrowed from a handle cannot outlive it:
//!
//! ```compile_fail
//! use geos::Geom;
//! use geoshape::Geometry;
//!
//! let point = Geometry::point(1.0, 2.0).unwrap();
//! let native = point.handle().native();
//! drop(point);
//! native.get_x().unwrap();
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::trace;

use crate::error::{GeoshapeError, Result};

struct NativeResource {
    geom: geos::Geometry,
}

impl Drop for NativeResource {
    fn drop(&mut self) {
        trace!("releasing native geometry");
    }
}

/// An owned, shareable native geometry resource.
#[derive(Clone)]
pub struct Handle {
    inner: Arc<NativeResource>,
}

impl Handle {
    /// Take ownership of a geometry returned by the native engine.
    pub fn acquire(geom: geos::Geometry) -> Self {
        trace!("acquired native geometry");
        Self {
            inner: Arc::new(NativeResource { geom }),
        }
    }

    /// Take ownership of the result of a native constructor.
    ///
    /// On failure no handle is produced and nothing needs releasing.
    pub fn try_acquire(result: std::result::Result<geos::Geometry, geos::Error>) -> Result<Self> {
        match result {
            Ok(geom) => Ok(Self::acquire(geom)),
            Err(err) => Err(GeoshapeError::Construction(err.to_string())),
        }
    }

    /// Borrow the native geometry for the duration of a call.
    pub fn native(&self) -> &geos::Geometry {
        &self.inner.geom
    }

    /// The number of live owners of the underlying resource.
    pub fn owner_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether two handles share the same native resource.
    pub fn ptr_eq(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A non-owning reference that does not keep the resource alive.
    pub fn downgrade(&self) -> WeakHandle {
        WeakHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("owners", &self.owner_count())
            .finish_non_exhaustive()
    }
}

/// A non-owning alias of a [`Handle`].
///
/// Upgrading fails once every owner has been dropped, so a retained alias can never
/// reach released native memory.
#[derive(Clone, Debug)]
pub struct WeakHandle {
    inner: Weak<NativeResource>,
}

impl WeakHandle {
    pub fn upgrade(&self) -> Option<Handle> {
        self.inner.upgrade().map(|inner| Handle { inner })
    }
}

impl fmt::Debug for NativeResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeResource")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geos::Geom;

    #[test]
    fn shares_without_copying() {
        let handle = Handle::acquire(geos::Geometry::new_from_wkt("POINT (1 2)").unwrap());
        let alias = handle.clone();
        assert!(handle.ptr_eq(&alias));
        assert_eq!(handle.owner_count(), 2);
        drop(alias);
        assert_eq!(handle.owner_count(), 1);
        assert_eq!(handle.native().get_x().unwrap(), 1.0);
    }

    #[test]
    fn failed_acquire_produces_no_handle() {
        let result = Handle::try_acquire(geos::Geometry::new_from_wkt("POINT (1"));
        assert!(matches!(result, Err(GeoshapeError::Construction(_))));
    }

    #[test]
    fn weak_alias_fails_after_release() {
        let handle = Handle::acquire(geos::Geometry::new_from_wkt("POINT (1 2)").unwrap());
        let weak = handle.downgrade();
        assert!(weak.upgrade().is_some());
        drop(handle);
        assert!(weak.upgrade().is_none());
    }
}
