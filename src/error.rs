//! Defines [`GeoshapeError`], representing all errors returned by this crate.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoshapeError {
    /// A native resource could not be built from the given input.
    ///
    /// No handle exists when this is returned.
    #[error("Construction error: {0}")]
    Construction(String),

    /// Operand shapes cannot be broadcast together.
    ///
    /// Raised before any native call is made.
    #[error("Operands could not be broadcast together with shapes {}", display_shapes(.shapes))]
    ShapeMismatch {
        /// The shapes of every operand, in argument order.
        shapes: Vec<Vec<usize>>,
    },

    /// One or more elements of a dispatched operation failed.
    #[error(transparent)]
    Operation(#[from] OperationFailures),

    /// Malformed WKB or WKT input.
    #[error("Codec error: {0}")]
    Codec(String),

    /// An array was built with an element count that does not match its shape.
    #[error(transparent)]
    InvalidShape(#[from] ndarray::ShapeError),

    /// An argument was rejected before reaching the native engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// [geos::Error]
    #[error(transparent)]
    Geos(#[from] geos::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoshapeError>;

/// A single failed element of a dispatched operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFailure {
    /// Position of the element in the output array.
    pub index: Vec<usize>,
    /// The error reported for that element.
    pub message: String,
}

/// Every element failure of one dispatched operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct OperationFailures {
    /// Name of the operation that failed.
    pub operation: &'static str,
    /// Failures in output iteration order.
    pub failures: Vec<ElementFailure>,
}

impl OperationFailures {
    /// The output positions that failed.
    pub fn indices(&self) -> Vec<&[usize]> {
        self.failures.iter().map(|f| f.index.as_slice()).collect()
    }
}

impl fmt::Display for OperationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation '{}' failed for {} element(s): ",
            self.operation,
            self.failures.len()
        )?;
        let listed = self
            .failures
            .iter()
            .take(5)
            .map(|failure| format!("{:?}: {}", failure.index, failure.message))
            .join("; ");
        f.write_str(&listed)?;
        if self.failures.len() > 5 {
            write!(f, "; and {} more", self.failures.len() - 5)?;
        }
        Ok(())
    }
}

fn display_shapes(shapes: &[Vec<usize>]) -> String {
    shapes.iter().map(|shape| format!("{shape:?}")).join(" ")
}
