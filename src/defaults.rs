//! Default node declarations.
//!
//! A declaration names a dotted path and, optionally, the value, value kind,
//! and comment to install there the next time the document is saved — but
//! only if the user has not set anything at that path. Declarations are
//! consumed read-only at save time and are never persisted themselves.

use crate::document::ValueKind;
use serde_json::Value;

/// A pending default declaration.
///
/// A declaration without a value is a placeholder: it carries propagated kind
/// information (and possibly a comment) for an intermediate path.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultNode {
    key: String,
    value: Option<Value>,
    kind: Option<ValueKind>,
    comment: Option<String>,
}

impl DefaultNode {
    /// Start building a declaration.
    pub fn builder() -> DefaultNodeBuilder {
        DefaultNodeBuilder::default()
    }

    /// Placeholder declaration for an ancestor of a registered key: kind
    /// propagates, value and comment do not.
    pub(crate) fn placeholder(key: String, kind: Option<ValueKind>) -> Self {
        Self {
            key,
            value: None,
            kind,
            comment: None,
        }
    }

    /// The dotted path this declaration targets.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The default value to install, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The declared value kind, if any.
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// The comment to attach, if any and if the format supports comments.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Fluent builder for [`DefaultNode`].
#[derive(Debug, Default)]
pub struct DefaultNodeBuilder {
    key: String,
    value: Option<Value>,
    kind: Option<ValueKind>,
    comment: Option<String>,
}

impl DefaultNodeBuilder {
    /// Set the dotted path key, e.g. `"server.port"`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the default value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the value kind used for typed assignment at the format boundary.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the comment to attach when the format supports comments.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Build the declaration. Key validity is checked at registration time.
    pub fn build(self) -> DefaultNode {
        DefaultNode {
            key: self.key,
            value: self.value,
            kind: self.kind,
            comment: self.comment,
        }
    }
}
