//! Error types for loading game documents.
//!
//! Resolution itself never fails: a missing target or card is recorded
//! in the trace. Only reading the input can go wrong.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed game document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
