//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HlError` as one variant
//! via `#[from]`.

use thiserror::Error;

use crate::NodeId;

/// Errors raised by configuration validation and id lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HlError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}

/// Shorthand result type for `hl-core`.
pub type HlResult<T> = Result<T, HlError>;
