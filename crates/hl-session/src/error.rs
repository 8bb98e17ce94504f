use hl_core::HlError;
use hl_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("no map has been generated yet")]
    NoMap,

    #[error(transparent)]
    Config(#[from] HlError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type SessionResult<T> = Result<T, SessionError>;
