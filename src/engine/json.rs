//! Plain JSON engine. No comment support: comments attached to nodes are
//! silently dropped at serialization.

use crate::document::DocumentNode;
use crate::engine::DocumentEngine;
use crate::error::EngineError;
use serde_json::{Map, Value};
use std::path::Path;

/// JSON document engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEngine;

impl DocumentEngine for JsonEngine {
    fn load(&self, path: &Path) -> Result<DocumentNode, EngineError> {
        let text = std::fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(DocumentNode::new());
        }
        let value: Value =
            serde_json::from_str(&text).map_err(|e| EngineError::Parse(e.to_string()))?;
        let mut root = DocumentNode::new();
        read_value(&value, &mut root);
        Ok(root)
    }

    fn save(&self, path: &Path, root: &DocumentNode) -> Result<(), EngineError> {
        let value = if root.is_empty() {
            Value::Object(Map::new())
        } else {
            node_json(root)
        };
        let mut rendered = serde_json::to_string_pretty(&value)
            .map_err(|e| EngineError::Render(e.to_string()))?;
        rendered.push('\n');
        std::fs::write(path, rendered)?;
        Ok(())
    }

    fn supports_comments(&self) -> bool {
        false
    }
}

fn read_value(value: &Value, node: &mut DocumentNode) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                read_value(child, node.child_mut(name));
            }
        }
        other => node.set_value(other.clone()),
    }
}

fn node_json(node: &DocumentNode) -> Value {
    let has_child_content = node.children().any(|(_, c)| !c.is_empty());
    if has_child_content {
        // Children supersede a stray scalar on an interior node.
        let mut map = Map::new();
        for (name, child) in node.children() {
            if child.is_empty() {
                continue;
            }
            map.insert(name.to_string(), node_json(child));
        }
        Value::Object(map)
    } else {
        node.value().cloned().unwrap_or(Value::Null)
    }
}
