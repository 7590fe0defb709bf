use std::collections::HashMap;

use log::debug;
use rand::Rng;

use super::prefix::Prefix;

/// Word-level Markov chain.
///
/// The `Chain` maps every prefix of `prefix_length` words seen in the corpus
/// to the list of words that followed it, in order of appearance.
///
/// # Responsibilities
/// - Build the mapping from a tokenized corpus in one left-to-right scan
/// - Pick a successor for a prefix with a uniform draw over its list
///
/// # Invariants
/// - Every key holds exactly `prefix_length` words
/// - Every successor list is non-empty
/// - Repeated observations are kept: a successor seen twice after the same
///   prefix appears twice in the list and is twice as likely to be drawn
/// - The chain is never mutated after `build`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// Number of words in every key
	prefix_length: usize,

	/// Successors of each prefix, in corpus order, duplicates included.
	/// Example: { ["the", "cat"] => ["sat", "ran"] }
	successors: HashMap<Prefix, Vec<String>>,
}

impl Chain {
	/// Builds the chain from a word sequence.
	///
	/// For each window `words[i..i + prefix_length]` that has a following
	/// word, the following word is appended to that window's successor list.
	///
	/// # Notes
	/// - A corpus of exactly `prefix_length` words (or fewer) produces an
	///   empty chain. That is not an error here; generation reports it when
	///   the starting prefix cannot be found.
	pub fn build<S: AsRef<str>>(words: &[S], prefix_length: usize) -> Self {
		let mut successors: HashMap<Prefix, Vec<String>> = HashMap::new();

		for i in 0..words.len().saturating_sub(prefix_length) {
			let prefix = Prefix::new(&words[i..i + prefix_length]);
			let next_word = words[i + prefix_length].as_ref().to_owned();
			successors.entry(prefix).or_default().push(next_word);
		}

		let chain = Self { prefix_length, successors };
		debug!(
			"built chain: {} words, prefix length {}, {} prefixes, {} transitions",
			words.len(),
			prefix_length,
			chain.len(),
			chain.transition_count()
		);
		chain
	}

	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Total number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.successors.values().map(Vec::len).sum()
	}

	pub fn contains(&self, prefix: &Prefix) -> bool {
		self.successors.contains_key(prefix)
	}

	/// Returns the successors recorded for `prefix`, in corpus order.
	pub fn successors(&self, prefix: &Prefix) -> Option<&[String]> {
		self.successors.get(prefix).map(Vec::as_slice)
	}

	/// Iterates over every prefix and its successor list.
	pub fn iter(&self) -> impl Iterator<Item = (&Prefix, &[String])> {
		self.successors.iter().map(|(k, v)| (k, v.as_slice()))
	}

	/// Draws the next word after `prefix`.
	///
	/// Each entry of the successor list is equally likely, so a word's
	/// probability follows its number of observations.
	///
	/// Returns `None` if the prefix is unknown.
	pub fn predict<R: Rng + ?Sized>(&self, prefix: &Prefix, rng: &mut R) -> Option<&str> {
		let successors = self.successors.get(prefix)?;
		if successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..successors.len());
		Some(successors[index].as_str())
	}
}
