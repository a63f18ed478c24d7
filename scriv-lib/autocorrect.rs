//! Whole-document autocorrection.
//!
//! Scans a document in order, leaving gap text (whitespace, punctuation,
//! digits) untouched and replacing each misspelled word token with its
//! best correction. The output reconstructs the document byte for byte
//! except for the substituted tokens.

use scriv_core::tokens::{
  Token,
  tokens,
};

use crate::{
  Tendril,
  dictionary::Dictionary,
  suggest::{
    SuggestConfig,
    correct,
  },
};

/// Result of a bulk correction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrected {
  pub text:        String,
  pub corrections: usize,
}

/// The single best correction for `word`, if any.
///
/// "Best" is smallest edit distance; ties fall to discovery order, same
/// as [`correct`]. A word already in the dictionary has no correction.
pub fn best_correction(dict: &Dictionary, word: &str, config: &SuggestConfig) -> Option<Tendril> {
  correct(dict, word, config)
    .into_iter()
    .next()
    .map(|suggestion| suggestion.word)
}

/// Correct every misspelled word token in `document`.
///
/// A token that is already a dictionary entry (case-folded) is never
/// touched. Substitutions re-apply the original token's leading
/// capitalization; the rest of the replacement is dictionary-native
/// lowercase.
pub fn correct_text(dict: &Dictionary, document: &str, config: &SuggestConfig) -> Corrected {
  let mut text = String::with_capacity(document.len());
  let mut corrections = 0;

  for token in tokens(document) {
    match token {
      Token::Gap(gap) => text.push_str(gap),
      Token::Word(word) => {
        if dict.contains(word) {
          text.push_str(word);
          continue;
        }
        match best_correction(dict, word, config) {
          Some(replacement) => {
            push_recased(&mut text, word, &replacement);
            corrections += 1;
          },
          None => text.push_str(word),
        }
      },
    }
  }

  tracing::debug!(corrections, "bulk autocorrect pass finished");
  Corrected { text, corrections }
}

/// Append `replacement`, uppercasing its first letter if the original
/// token led with an uppercase letter.
fn push_recased(out: &mut String, original: &str, replacement: &str) {
  let capitalize = original
    .chars()
    .next()
    .is_some_and(|ch| ch.is_ascii_uppercase());
  let mut chars = replacement.chars();
  match chars.next() {
    Some(first) if capitalize => {
      out.push(first.to_ascii_uppercase());
      out.push_str(chars.as_str());
    },
    _ => out.push_str(replacement),
  }
}
