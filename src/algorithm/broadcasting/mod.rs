//! Operands that can be broadcast against each other with numpy rules.

mod broadcastable;
mod shape;

pub use broadcastable::Broadcastable;
pub use shape::broadcast_shapes;
pub(crate) use shape::{broadcast_view, unravel_index};
