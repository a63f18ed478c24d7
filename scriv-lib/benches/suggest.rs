//! Benchmarks for dictionary lookups in scriv-lib.
//!
//! Run with: `cargo bench -p scriv-lib --bench suggest`

use divan::{
  Bencher,
  black_box,
};
use scriv_lib::{
  dictionary::Dictionary,
  suggest::{
    SuggestConfig,
    autocomplete,
    correct,
  },
};

fn main() {
  divan::main();
}

/// Synthetic corpus: every word of length `len` over a small alphabet,
/// which gives the fuzzy search a densely branching trie to prune.
fn make_dictionary(len: usize) -> Dictionary {
  let letters = ["a", "b", "c", "d", "e", "r", "s", "t"];
  let mut words = vec![String::new()];
  for _ in 0..len {
    words = words
      .iter()
      .flat_map(|word| letters.iter().map(move |l| format!("{word}{l}")))
      .collect();
  }
  Dictionary::from_words(words)
}

#[divan::bench(args = [3, 4, 5])]
fn fuzzy_correct(bencher: Bencher, len: usize) {
  let dict = make_dictionary(len);
  let config = SuggestConfig::default();
  // One edit short of a dictionary word, so the search works for it.
  let query: String = "ab".repeat(len).chars().take(len - 1).collect();

  bencher.bench(|| correct(black_box(&dict), black_box(&query), &config));
}

#[divan::bench(args = [3, 4, 5])]
fn prefix_autocomplete(bencher: Bencher, len: usize) {
  let dict = make_dictionary(len);
  let config = SuggestConfig::default();

  bencher.bench(|| autocomplete(black_box(&dict), black_box("ab"), &config));
}
