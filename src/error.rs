//! Error types for graph arrays and operators

use crate::graph::ElementKind;
use thiserror::Error;

/// Errors that can occur while building graphs, arrays and operators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The operation needs a frozen graph
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Structural mutation attempted after freeze
    #[error("Graph is frozen: cannot {0}")]
    ImmutableGraph(String),

    #[error("{kind} {key} not found in the base graph")]
    ElementNotFound { kind: ElementKind, key: String },

    /// Operand of the wrong element kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Cannot compute between variables associated with different graphs")]
    CrossGraph,

    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub(crate) fn not_found(kind: ElementKind, key: impl std::fmt::Debug) -> Self {
        GraphError::ElementNotFound {
            kind,
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        GraphError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
