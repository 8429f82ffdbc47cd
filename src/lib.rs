//! Stash: default-aware configuration documents
//!
//! Manages a hierarchical, dotted-path configuration document backed by a
//! human-editable file. Host applications register default nodes (path,
//! optional typed value, optional comment) that are merged into the document
//! at save time without ever overwriting values the user has set.
//!
//! ```no_run
//! use stash::{DefaultNode, Stash, TomlEngine, ValueKind};
//!
//! let mut stash = Stash::new("config.toml", TomlEngine);
//! stash.init();
//! stash.register_default(
//!     DefaultNode::builder()
//!         .key("server.port")
//!         .value(25565)
//!         .kind(ValueKind::Integer)
//!         .comment("Port the server listens on")
//!         .build(),
//! );
//! stash.save();
//! ```

pub mod defaults;
pub mod document;
pub mod engine;
pub mod error;
pub mod logging;
pub mod stash;

pub use defaults::{DefaultNode, DefaultNodeBuilder};
pub use document::{DocumentNode, KeyPath, ValueKind};
pub use engine::{DocumentEngine, JsonEngine, TomlEngine};
pub use error::{EngineError, StashError};
pub use stash::Stash;
