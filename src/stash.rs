//! The document manager.
//!
//! Owns the backing file, the in-memory document tree, and the ordered
//! registry of pending default declarations. Lifecycle operations are
//! chainable and never fail loudly: every failure is emitted as a structured
//! log event and the manager keeps its previous valid state.

use crate::defaults::DefaultNode;
use crate::document::{value, DocumentNode, KeyPath, ValueKind};
use crate::engine::DocumentEngine;
use crate::error::StashError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Default-aware manager for a hierarchical configuration document.
///
/// One manager exclusively owns its backing file and document for its
/// lifetime. Callers needing concurrent access serialize externally.
pub struct Stash<E> {
    engine: E,
    path: PathBuf,
    root: DocumentNode,
    defaults: Vec<DefaultNode>,
}

impl<E: DocumentEngine> Stash<E> {
    /// Create a manager for the file at `path`. Nothing is read until
    /// [`init`](Self::init) or [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>, engine: E) -> Self {
        Self {
            engine,
            path: path.into(),
            root: DocumentNode::new(),
            defaults: Vec::new(),
        }
    }

    /// Initialize the backing file: create it if missing, then load it.
    ///
    /// Creation failure is logged and non-fatal; the subsequent load then
    /// reports its own failure and the manager continues on an empty
    /// document.
    pub fn init(&mut self) -> &mut Self {
        if !self.path.exists() {
            if let Err(e) = std::fs::File::create(&self.path) {
                error!(
                    path = %self.path.display(),
                    error = %StashError::FileCreate { path: self.path.clone(), source: e },
                    "unable to create configuration file"
                );
            }
        }
        self.load()
    }

    /// Re-read the backing file into the document tree.
    ///
    /// On failure the previous in-memory document is retained.
    pub fn load(&mut self) -> &mut Self {
        match self.engine.load(&self.path) {
            Ok(root) => self.root = root,
            Err(e) => error!(
                path = %self.path.display(),
                error = %StashError::FileLoad { path: self.path.clone(), source: e },
                "unable to load configuration file"
            ),
        }
        self
    }

    /// Apply all registered defaults to unset nodes, then serialize the whole
    /// document to the backing file.
    ///
    /// A failed save leaves the in-memory document (defaults applied) intact
    /// and the file untouched.
    pub fn save(&mut self) -> &mut Self {
        self.apply_defaults();
        if let Err(e) = self.engine.save(&self.path, &self.root) {
            error!(
                path = %self.path.display(),
                error = %StashError::FileSave { path: self.path.clone(), source: e },
                "unable to save configuration file"
            );
        }
        self
    }

    /// Register a default declaration.
    ///
    /// Every ancestor prefix of the key is registered first as a placeholder
    /// carrying the declaration's kind, so typed lookups at intermediate
    /// paths behave consistently. Expansion runs on every call and the
    /// registry is never deduplicated; the apply step's "only act on unset
    /// nodes" rule makes duplicates harmless.
    ///
    /// Declarations with an invalid key (empty, or containing an empty
    /// segment) are logged and ignored.
    pub fn register_default(&mut self, node: DefaultNode) -> &mut Self {
        let path = match KeyPath::parse(node.key()) {
            Ok(path) => path,
            Err(e) => {
                warn!(key = node.key(), error = %e, "ignoring default node with invalid key");
                return self;
            }
        };
        for ancestor in path.ancestors() {
            self.defaults
                .push(DefaultNode::placeholder(ancestor.to_string(), node.kind()));
        }
        self.defaults.push(node);
        self
    }

    /// Resolve a dotted path to a node. Pure navigation: absent nodes yield
    /// `None`, nothing is created.
    pub fn child_node(&self, key: &str) -> Option<&DocumentNode> {
        let path = self.parse_key(key)?;
        self.root.descendant(&path)
    }

    /// The raw value at `key`, or `None` when unset.
    pub fn child_value(&self, key: &str) -> Option<&Value> {
        self.child_node(key).and_then(DocumentNode::value)
    }

    /// The value at `key` coerced to `kind`.
    ///
    /// The kind is advisory: on coercion failure the raw untyped value is
    /// returned instead and the failure is logged. Callers must not assume
    /// the result always matches `kind`.
    pub fn child_value_as(&self, key: &str, kind: ValueKind) -> Option<Value> {
        let raw = self.child_value(key)?;
        match value::coerce(raw, kind) {
            Ok(coerced) => Some(coerced),
            Err(e) => {
                error!(key, error = %e, "unable to coerce value; returning raw value");
                Some(raw.clone())
            }
        }
    }

    /// Read-only view of the pending default registry, in insertion order.
    pub fn registered_defaults(&self) -> &[DefaultNode] {
        &self.defaults
    }

    /// The in-memory document root.
    pub fn root(&self) -> &DocumentNode {
        &self.root
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the registry in order and install each default whose target node
    /// is still unset. Nodes the user has set are never touched, value or
    /// comment.
    fn apply_defaults(&mut self) {
        let supports_comments = self.engine.supports_comments();
        for entry in &self.defaults {
            let Ok(path) = KeyPath::parse(entry.key()) else {
                // Registration rejects invalid keys; nothing to do here.
                continue;
            };
            let unset = self
                .root
                .descendant(&path)
                .map_or(true, DocumentNode::is_empty);
            if !unset {
                continue;
            }

            if let Some(raw) = entry.value() {
                let resolved = match entry.kind() {
                    Some(kind) => match value::coerce(raw, kind) {
                        Ok(coerced) => Some(coerced),
                        Err(e) => {
                            warn!(
                                key = entry.key(),
                                error = %e,
                                "skipping default value that does not fit its declared kind"
                            );
                            None
                        }
                    },
                    None => Some(raw.clone()),
                };
                if let Some(resolved) = resolved {
                    self.root.descendant_mut(&path).set_value(resolved);
                }
            }

            // Comment placement is independent of whether a value was
            // written; the only gate is that the node was unset above.
            if supports_comments {
                if let Some(comment) = entry.comment() {
                    self.root.descendant_mut(&path).set_comment(comment);
                }
            }
        }
    }

    fn parse_key(&self, key: &str) -> Option<KeyPath> {
        match KeyPath::parse(key) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(key, error = %e, "invalid lookup key");
                None
            }
        }
    }
}
