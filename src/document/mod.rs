//! In-memory configuration document tree.
//!
//! A document is a tree of nodes addressed by dotted paths. Each node may
//! hold a value, a comment (honored only by comment-capable formats), and
//! named children. Node identity is fully determined by the path from the
//! root.

pub mod path;
pub mod value;

pub use path::KeyPath;
pub use value::ValueKind;

use serde_json::Value;
use std::collections::BTreeMap;

/// A node in the configuration document tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentNode {
    value: Option<Value>,
    comment: Option<String>,
    children: BTreeMap<String, DocumentNode>,
}

impl DocumentNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value held directly by this node, if any.
    ///
    /// Interior nodes whose descendants hold values still report `None` here;
    /// only a value assigned to this exact path counts.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Assign a value to this node.
    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// The comment attached to this node, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Attach a comment to this node.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    /// Iterate over direct children in segment order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &DocumentNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Look up a direct child by segment name.
    pub fn child(&self, name: &str) -> Option<&DocumentNode> {
        self.children.get(name)
    }

    /// Get or create a direct child by segment name.
    pub fn child_mut(&mut self, name: &str) -> &mut DocumentNode {
        self.children.entry(name.to_string()).or_default()
    }

    /// Resolve a path below this node without creating anything.
    pub fn descendant(&self, path: &KeyPath) -> Option<&DocumentNode> {
        let mut node = self;
        for segment in path.segments() {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Resolve a path below this node, creating intermediate nodes as needed.
    pub fn descendant_mut(&mut self, path: &KeyPath) -> &mut DocumentNode {
        let mut node = self;
        for segment in path.segments() {
            node = node.child_mut(segment);
        }
        node
    }

    /// True when neither this node nor any descendant holds a value.
    ///
    /// An empty node is indistinguishable from an absent one as far as
    /// default application is concerned.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.values().all(DocumentNode::is_empty)
    }
}
