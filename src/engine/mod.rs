//! Pluggable document engines.
//!
//! An engine owns the file format: it parses a backing file into a document
//! tree and renders a tree back out. The manager stays format-agnostic and
//! only asks one capability question, whether the format can carry per-node
//! comments.

pub mod json;
pub mod toml;

pub use json::JsonEngine;
pub use toml::TomlEngine;

use crate::document::DocumentNode;
use crate::error::EngineError;
use std::path::Path;

/// Backing serialization format for a configuration document.
pub trait DocumentEngine {
    /// Parse the file at `path` into a document tree.
    ///
    /// An empty file yields an empty tree; a missing file is an I/O error.
    fn load(&self, path: &Path) -> Result<DocumentNode, EngineError>;

    /// Render `root` and write it to `path`.
    ///
    /// The document is rendered fully in memory before any byte is written,
    /// so a failed save never leaves an unparsable file behind.
    fn save(&self, path: &Path, root: &DocumentNode) -> Result<(), EngineError>;

    /// Whether the format can carry per-node comments.
    fn supports_comments(&self) -> bool;
}
