//! Integration tests for the document manager lifecycle.

use serde_json::json;
use stash::{DefaultNode, DocumentEngine, JsonEngine, Stash, TomlEngine, ValueKind};
use tempfile::TempDir;

#[test]
fn test_empty_registry_empty_document_saves_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init().save();

    // The resulting document is empty and parses back to an empty tree.
    let loaded = TomlEngine.load(&file).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_typed_default_lands_on_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .build(),
    );
    stash.save();

    assert_eq!(
        stash.child_value_as("server.port", ValueKind::Integer),
        Some(json!(25565))
    );
    // Only kind information propagated to the intermediate path; it holds no
    // value of its own.
    assert!(stash.child_value("server").is_none());
}

#[test]
fn test_user_set_value_survives_conflicting_default() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");
    std::fs::write(&file, "[server]\nport = 9999\n").unwrap();

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .comment("Listen port")
            .build(),
    );
    stash.save();

    assert_eq!(stash.child_value("server.port"), Some(&json!(9999)));

    // The comment declared on the default was not attached either.
    let text = std::fs::read_to_string(&file).unwrap();
    assert!(!text.contains("Listen port"));
}

#[test]
fn test_save_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .comment("Listen port")
            .build(),
    );
    stash.register_default(DefaultNode::builder().key("debug").value(false).build());

    stash.save();
    let first = std::fs::read_to_string(&file).unwrap();
    stash.save();
    let second = std::fs::read_to_string(&file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_load_round_trip_preserves_values() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .build(),
    );
    stash.register_default(
        DefaultNode::builder()
            .key("server.host")
            .value("0.0.0.0")
            .build(),
    );
    stash.register_default(DefaultNode::builder().key("debug").value(false).build());
    stash.save();

    let before = [
        ("server.port", stash.child_value("server.port").cloned()),
        ("server.host", stash.child_value("server.host").cloned()),
        ("debug", stash.child_value("debug").cloned()),
    ];

    stash.load();

    for (key, expected) in before {
        assert_eq!(stash.child_value(key).cloned(), expected, "key {}", key);
    }
}

#[test]
fn test_comment_written_for_toml_not_for_json() {
    let temp_dir = TempDir::new().unwrap();

    let toml_file = temp_dir.path().join("config.toml");
    let mut toml_stash = Stash::new(&toml_file, TomlEngine);
    toml_stash.init();
    toml_stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .comment("Port the server listens on")
            .build(),
    );
    toml_stash.save();
    let toml_text = std::fs::read_to_string(&toml_file).unwrap();
    assert!(toml_text.contains("# Port the server listens on"));

    let json_file = temp_dir.path().join("config.json");
    let mut json_stash = Stash::new(&json_file, JsonEngine);
    json_stash.init();
    json_stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .comment("Port the server listens on")
            .build(),
    );
    json_stash.save();
    let json_text = std::fs::read_to_string(&json_file).unwrap();
    assert!(!json_text.contains("Port the server listens on"));
    assert_eq!(
        json_stash.child_value_as("server.port", ValueKind::Integer),
        Some(json!(25565))
    );
}

#[test]
fn test_intermediate_comment_via_placeholder_declaration() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    // A valueless declaration only carries a comment for an intermediate path.
    stash.register_default(
        DefaultNode::builder()
            .key("server")
            .comment("Server settings")
            .build(),
    );
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .build(),
    );
    stash.save();

    let text = std::fs::read_to_string(&file).unwrap();
    assert!(text.contains("# Server settings"));
    assert!(text.find("# Server settings").unwrap() < text.find("[server]").unwrap());
    assert_eq!(stash.child_value("server.port"), Some(&json!(25565)));
}

#[test]
fn test_typed_get_mismatch_returns_raw_value() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");
    std::fs::write(&file, "motd = \"hello world\"\n").unwrap();

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();

    // "hello world" cannot become an integer; the raw value comes back.
    assert_eq!(
        stash.child_value_as("motd", ValueKind::Integer),
        Some(json!("hello world"))
    );
}

#[test]
fn test_defaults_fill_gaps_around_user_edits() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");
    std::fs::write(&file, "[server]\nhost = \"example.org\"\n").unwrap();

    let mut stash = Stash::new(&file, TomlEngine);
    stash.init();
    stash.register_default(
        DefaultNode::builder()
            .key("server.host")
            .value("0.0.0.0")
            .build(),
    );
    stash.register_default(
        DefaultNode::builder()
            .key("server.port")
            .value(25565)
            .kind(ValueKind::Integer)
            .build(),
    );
    stash.save();

    // User-set host survives; the missing port is filled in.
    assert_eq!(stash.child_value("server.host"), Some(&json!("example.org")));
    assert_eq!(stash.child_value("server.port"), Some(&json!(25565)));
}

#[test]
fn test_chained_lifecycle_calls() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("config.toml");

    let mut stash = Stash::new(&file, TomlEngine);
    stash
        .register_default(DefaultNode::builder().key("debug").value(true).build())
        .init()
        .save()
        .load();

    assert_eq!(stash.child_value("debug"), Some(&json!(true)));
}
