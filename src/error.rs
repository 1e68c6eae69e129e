//! Crate error type.
//!
//! Malformed server data is a contract violation: the adapter surfaces it as
//! an [`Error`] instead of dropping the offending entry, and the engine keeps
//! showing the last good scene.

/// Errors produced while decoding server data or drawing a frame.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed coordinate: {0:?}")]
    MalformedCoordinate(String),
    #[error("malformed move: {0:?}")]
    MalformedMove(String),
    #[error("unknown tile kind: {0:?}")]
    UnknownTile(String),
    #[error("malformed cell at {coordinate}: {value:?}")]
    MalformedCell { coordinate: String, value: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
