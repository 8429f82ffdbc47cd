//! Comment-capable TOML engine built on `toml_edit`.

use crate::document::DocumentNode;
use crate::engine::DocumentEngine;
use crate::error::EngineError;
use serde_json::{Map, Value};
use std::path::Path;
use toml_edit::{Array, DocumentMut, InlineTable, Item, Table, Value as TomlValue};

/// TOML document engine. Comment-capable: comments render as `#` lines
/// above the key or table header they annotate.
///
/// Comments already present on disk are not rehydrated into the tree on
/// load; the manager only ever writes comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlEngine;

impl DocumentEngine for TomlEngine {
    fn load(&self, path: &Path) -> Result<DocumentNode, EngineError> {
        let text = std::fs::read_to_string(path)?;
        let doc = text
            .parse::<DocumentMut>()
            .map_err(|e| EngineError::Parse(e.to_string()))?;
        let mut root = DocumentNode::new();
        read_table(doc.as_table(), &mut root);
        Ok(root)
    }

    fn save(&self, path: &Path, root: &DocumentNode) -> Result<(), EngineError> {
        let mut doc = DocumentMut::new();
        write_table(root, doc.as_table_mut())?;
        std::fs::write(path, doc.to_string())?;
        Ok(())
    }

    fn supports_comments(&self) -> bool {
        true
    }
}

fn read_table(table: &Table, node: &mut DocumentNode) {
    for (name, item) in table.iter() {
        match item {
            Item::Value(value) => node.child_mut(name).set_value(json_value(value)),
            Item::Table(sub) => read_table(sub, node.child_mut(name)),
            Item::ArrayOfTables(tables) => {
                let array = tables.iter().map(table_json).collect();
                node.child_mut(name).set_value(Value::Array(array));
            }
            Item::None => {}
        }
    }
}

fn table_json(table: &Table) -> Value {
    let mut map = Map::new();
    for (name, item) in table.iter() {
        match item {
            Item::Value(value) => {
                map.insert(name.to_string(), json_value(value));
            }
            Item::Table(sub) => {
                map.insert(name.to_string(), table_json(sub));
            }
            Item::ArrayOfTables(tables) => {
                map.insert(
                    name.to_string(),
                    Value::Array(tables.iter().map(table_json).collect()),
                );
            }
            Item::None => {}
        }
    }
    Value::Object(map)
}

fn json_value(value: &TomlValue) -> Value {
    match value {
        TomlValue::String(s) => Value::String(s.value().clone()),
        TomlValue::Integer(i) => Value::from(*i.value()),
        TomlValue::Float(f) => Value::from(*f.value()),
        TomlValue::Boolean(b) => Value::Bool(*b.value()),
        TomlValue::Datetime(d) => Value::String(d.value().to_string()),
        TomlValue::Array(array) => Value::Array(array.iter().map(json_value).collect()),
        TomlValue::InlineTable(table) => {
            let mut map = Map::new();
            for (name, value) in table.iter() {
                map.insert(name.to_string(), json_value(value));
            }
            Value::Object(map)
        }
    }
}

fn write_table(node: &DocumentNode, table: &mut Table) -> Result<(), EngineError> {
    for (name, child) in node.children() {
        let has_child_content = child.children().any(|(_, c)| !c.is_empty());
        if has_child_content {
            // Children supersede a stray scalar on an interior node.
            let mut sub = Table::new();
            write_table(child, &mut sub)?;
            if let Some(comment) = child.comment() {
                sub.decor_mut().set_prefix(comment_prefix(comment));
            }
            table.insert(name, Item::Table(sub));
        } else if let Some(value) = child.value() {
            table.insert(name, Item::Value(toml_value(value)?));
            if let Some(comment) = child.comment() {
                if let Some(mut key) = table.key_mut(name) {
                    key.leaf_decor_mut().set_prefix(comment_prefix(comment));
                }
            }
        }
        // A node with neither value nor content-bearing children has nothing
        // to attach a comment to and is not serialized.
    }
    Ok(())
}

fn comment_prefix(comment: &str) -> String {
    let mut prefix = String::new();
    for line in comment.lines() {
        prefix.push_str("# ");
        prefix.push_str(line);
        prefix.push('\n');
    }
    prefix
}

fn toml_value(value: &Value) -> Result<TomlValue, EngineError> {
    match value {
        Value::Null => Err(EngineError::Render(
            "null is not representable in TOML".to_string(),
        )),
        Value::Bool(b) => Ok((*b).into()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.into())
            } else if let Some(f) = n.as_f64() {
                Ok(f.into())
            } else {
                Err(EngineError::Render(format!(
                    "number {} is not representable in TOML",
                    n
                )))
            }
        }
        Value::String(s) => Ok(s.as_str().into()),
        Value::Array(items) => {
            let mut array = Array::new();
            for item in items {
                array.push(toml_value(item)?);
            }
            Ok(TomlValue::Array(array))
        }
        Value::Object(map) => {
            let mut table = InlineTable::new();
            for (name, item) in map {
                table.insert(name.as_str(), toml_value(item)?);
            }
            Ok(TomlValue::InlineTable(table))
        }
    }
}
