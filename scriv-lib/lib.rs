use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod autocorrect;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod history;
pub mod suggest;
pub mod trie;

/// Short-string type used for dictionary words and suggestions.
pub type Tendril = SmartString<LazyCompact>;

pub use engine::Engine;
pub use history::History;
