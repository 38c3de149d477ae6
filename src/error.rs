use thiserror::Error;

use crate::graph::Vertex;

/// Errors reported by the checked (`try_*`) graph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for graph on {n} vertices")]
    VertexOutOfRange { vertex: Vertex, n: usize },
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),
}

impl GraphError {
    pub fn out_of_range(vertex: Vertex, n: usize) -> Self {
        GraphError::VertexOutOfRange { vertex, n }
    }

    pub fn unknown_label<T: Into<String>>(msg: T) -> Self {
        GraphError::UnknownLabel(msg.into())
    }

    pub fn duplicate_label<T: Into<String>>(msg: T) -> Self {
        GraphError::DuplicateLabel(msg.into())
    }
}
