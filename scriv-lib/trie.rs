//! Prefix tree over the 26-letter dictionary alphabet.
//!
//! The tree is owned exclusively by [`Trie`]; each node is owned by its
//! parent through a `Box`, nodes are created on demand and never deleted
//! (word removal is not part of this design).

use scriv_core::chars::{
  ALPHABET_LEN,
  fold_letter,
};

#[derive(Debug, Default)]
pub(crate) struct TrieNode {
  children: [Option<Box<TrieNode>>; ALPHABET_LEN],
  is_word:  bool,
}

impl TrieNode {
  #[inline]
  pub(crate) fn is_word(&self) -> bool {
    self.is_word
  }

  #[inline]
  pub(crate) fn child(&self, idx: u8) -> Option<&TrieNode> {
    self.children[idx as usize].as_deref()
  }

  fn child_or_insert(&mut self, idx: u8) -> &mut TrieNode {
    self.children[idx as usize].get_or_insert_with(Box::default)
  }

  /// Present children in alphabetical order (`'a'..'z'`). Traversal and
  /// suggestion ordering both depend on this.
  pub(crate) fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
    self
      .children
      .iter()
      .enumerate()
      .filter_map(|(idx, child)| child.as_deref().map(|node| (idx as u8, node)))
  }
}

#[derive(Debug, Default)]
pub struct Trie {
  root: TrieNode,
  len:  usize,
}

impl Trie {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert `word`, case-folded. Returns whether the word was accepted.
  ///
  /// Any character outside `[A-Za-z]` (or an empty word) abandons the
  /// insertion: the word flag is never set, so the word stays invisible
  /// to lookups. Nodes eagerly created along the valid prefix are left
  /// in place — accepted debt inherited from the original engine, since
  /// nodes are never deleted anyway.
  ///
  /// Inserting the same word twice leaves the tree unchanged.
  pub fn insert(&mut self, word: &str) -> bool {
    if word.is_empty() {
      return false;
    }

    let mut node = &mut self.root;
    for ch in word.chars() {
      let Some(idx) = fold_letter(ch) else {
        return false;
      };
      node = node.child_or_insert(idx);
    }

    if !node.is_word {
      node.is_word = true;
      self.len += 1;
    }
    true
  }

  /// Whether `word` is a complete dictionary entry (case-folded).
  pub fn contains(&self, word: &str) -> bool {
    !word.is_empty() && self.walk(word).is_some_and(TrieNode::is_word)
  }

  /// Walk the tree along `prefix` (case-folded). `None` if any character
  /// is outside the alphabet or the path does not exist.
  pub(crate) fn walk(&self, prefix: &str) -> Option<&TrieNode> {
    let mut node = &self.root;
    for ch in prefix.chars() {
      node = node.child(fold_letter(ch)?)?;
    }
    Some(node)
  }

  #[inline]
  pub(crate) fn root(&self) -> &TrieNode {
    &self.root
  }

  /// Number of distinct words stored.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}
