//! The vectorized elementwise dispatch engine.
//!
//! A [`Dispatcher`] broadcasts its operands to a common shape, skips positions where any
//! input is missing, invokes the operation once per remaining position and collects the
//! results into an array of the broadcast shape. Producer results are wrapped through the
//! registry like every other geometry value.

mod config;
mod engine;
mod op;

pub use config::{DispatchConfig, ErrorPolicy};
pub use engine::Dispatcher;
pub use op::{BinaryOp, NaryOp, OpOutput, ParamOp, UnaryOp};
