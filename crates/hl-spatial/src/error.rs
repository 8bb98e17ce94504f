//! Spatial-subsystem error type.

use thiserror::Error;

use hl_core::{HlError, NodeId};

/// Errors produced by `hl-spatial`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    #[error("node {0} not found in map")]
    NodeNotFound(NodeId),

    #[error("road from {0} to itself is not allowed")]
    SelfLoop(NodeId),

    #[error("a road between {a} and {b} already exists")]
    DuplicateRoad { a: NodeId, b: NodeId },

    #[error("road between {a} and {b} must have a positive length")]
    NonPositiveLength { a: NodeId, b: NodeId },

    #[error("map has no person node")]
    NoPerson,

    #[error(transparent)]
    Config(#[from] HlError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
