use thiserror::Error;

use crate::topology::Status;

/// Top-level error type for the mesh boolean core.
#[derive(Debug, Error)]
pub enum MeshBoolError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by malformed mesh input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("triangle index count {count} is not a multiple of three")]
    IndexCountNotMultipleOfThree { count: usize },

    #[error("triangle index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Errors related to the classified vertex/face store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Classification contract violations reported by the composer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("face {face} of operand {operand} carries status {status:?}, expected a face classification")]
    UnclassifiedFace {
        operand: char,
        face: usize,
        status: Status,
    },
}

/// Errors related to mesh operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MeshBoolError`].
pub type Result<T> = std::result::Result<T, MeshBoolError>;
