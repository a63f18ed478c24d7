//! ASCII alphabet classification and case folding.
//!
//! The dictionary operates over a fixed 26-letter alphabet. Everything
//! outside `[A-Za-z]` is not a letter as far as the engine is concerned:
//! insertions reject it, lookups miss on it, and the tokenizer treats it
//! as gap text.

/// Number of letters in the dictionary alphabet.
pub const ALPHABET_LEN: usize = 26;

#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  /// An ASCII letter; part of a word token.
  Word,
  Whitespace,
  /// Digits, punctuation, and anything non-ASCII.
  Other,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_word(c) => CharCategory::Word,
    c if c.is_whitespace() => CharCategory::Whitespace,
    _ => CharCategory::Other,
  }
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_ascii_alphabetic()
}

/// Case-fold a letter to its index in the alphabet (`'a'` and `'A'` both
/// map to `0`). Returns `None` outside `[A-Za-z]`.
#[inline]
pub fn fold_letter(ch: char) -> Option<u8> {
  if ch.is_ascii_alphabetic() {
    Some(ch.to_ascii_lowercase() as u8 - b'a')
  } else {
    None
  }
}

/// Inverse of [`fold_letter`]: the lowercase letter at an alphabet index.
///
/// # Panics
/// Panics if `idx >= ALPHABET_LEN`.
#[inline]
pub fn index_letter(idx: u8) -> char {
  assert!((idx as usize) < ALPHABET_LEN);
  (b'a' + idx) as char
}
