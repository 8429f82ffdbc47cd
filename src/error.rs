//! Error types for the Stash configuration document manager.

use crate::document::ValueKind;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the document format boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to render document: {0}")]
    Render(String),

    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the document manager.
///
/// Lifecycle operations never return these to the caller; they are emitted
/// through the logging side channel and the manager keeps its previous valid
/// state (or skips the single failed operation).
#[derive(Debug, Error)]
pub enum StashError {
    #[error("unable to create configuration file {path:?}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to load configuration file {path:?}: {source}")]
    FileLoad {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("unable to save configuration file {path:?}: {source}")]
    FileSave {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("unable to coerce value {value} to {kind:?}")]
    TypeCoercion { kind: ValueKind, value: Value },

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("logging configuration error: {0}")]
    Logging(String),
}
