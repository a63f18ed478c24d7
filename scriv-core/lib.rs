//! Leaf primitives for the scriv editing-support engine.
//!
//! No I/O lives here: only the ASCII alphabet model shared by the
//! dictionary trie and the word-token scanner used by bulk autocorrect.

pub mod chars;
pub mod tokens;
