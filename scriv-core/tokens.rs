//! Word-token scanning over free text.
//!
//! [`tokens`] splits a document into maximal runs of ASCII letters
//! ([`Token::Word`]) and everything in between ([`Token::Gap`]).
//! Concatenating the tokens in order reproduces the input byte for byte,
//! which is what lets the autocorrect pass substitute words without
//! disturbing whitespace or punctuation.

use crate::chars::char_is_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
  /// A maximal run of ASCII letters.
  Word(&'a str),
  /// Whitespace, punctuation, digits; copied through unchanged.
  Gap(&'a str),
}

impl<'a> Token<'a> {
  pub fn text(&self) -> &'a str {
    match self {
      Token::Word(text) | Token::Gap(text) => text,
    }
  }
}

/// Iterate over the word/gap tokens of `text`, in document order.
pub fn tokens(text: &str) -> Tokens<'_> {
  Tokens { rest: text }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
  rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
  type Item = Token<'a>;

  fn next(&mut self) -> Option<Token<'a>> {
    let mut chars = self.rest.char_indices();
    let (_, first) = chars.next()?;
    let in_word = char_is_word(first);

    let split = chars
      .find(|&(_, ch)| char_is_word(ch) != in_word)
      .map_or(self.rest.len(), |(at, _)| at);

    let (token, rest) = self.rest.split_at(split);
    self.rest = rest;

    Some(if in_word {
      Token::Word(token)
    } else {
      Token::Gap(token)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn collect(text: &str) -> Vec<Token<'_>> {
    tokens(text).collect()
  }

  #[test]
  fn splits_words_and_gaps() {
    assert_eq!(collect("hello world"), vec![
      Token::Word("hello"),
      Token::Gap(" "),
      Token::Word("world"),
    ]);
  }

  #[test]
  fn digits_and_punctuation_are_gaps() {
    assert_eq!(collect("a1b, c"), vec![
      Token::Word("a"),
      Token::Gap("1"),
      Token::Word("b"),
      Token::Gap(", "),
      Token::Word("c"),
    ]);
  }

  #[test]
  fn leading_and_trailing_gaps() {
    assert_eq!(collect("  hi!"), vec![
      Token::Gap("  "),
      Token::Word("hi"),
      Token::Gap("!"),
    ]);
  }

  #[test]
  fn empty_input_yields_nothing() {
    assert!(collect("").is_empty());
  }

  #[test]
  fn non_ascii_letters_are_gap_text() {
    // The alphabet is ASCII-only; anything else passes through untouched.
    assert_eq!(collect("caffè"), vec![Token::Word("caff"), Token::Gap("è")]);
  }

  quickcheck::quickcheck! {
    fn reconstructs_input(text: String) -> bool {
      let rebuilt: String = tokens(&text).map(|t| t.text()).collect();
      rebuilt == text
    }

    fn runs_alternate(text: String) -> bool {
      let mut last_was_word = None;
      for token in tokens(&text) {
        let is_word = matches!(token, Token::Word(_));
        if last_was_word == Some(is_word) {
          return false;
        }
        last_was_word = Some(is_word);
      }
      true
    }
  }
}
