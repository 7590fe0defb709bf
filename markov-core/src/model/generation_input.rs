use log::debug;

use crate::error::{MarkovError, Result};

pub const DEFAULT_WORD_COUNT: usize = 100;
pub const MIN_WORD_COUNT: usize = 1;
pub const MAX_WORD_COUNT: usize = 10_000;

pub const DEFAULT_PREFIX_LENGTH: usize = 2;
pub const MIN_PREFIX_LENGTH: usize = 1;
pub const MAX_PREFIX_LENGTH: usize = 5;

/// Parameters of a generation run.
///
/// `GenerationInput` holds the user-facing knobs: how many words to emit,
/// how many words make up a prefix, and an optional starting text.
///
/// # Responsibilities
/// - Provide defaults (`100` words, prefix length `2`, no starting text)
/// - Range-check each parameter as it is set
/// - Resolve the final parameters against the corpus (`resolve`), which
///   derives the starting prefix when none was given and runs the
///   cross-parameter checks
///
/// # Invariants
/// - `word_count` is within `MIN_WORD_COUNT..=MAX_WORD_COUNT`
/// - `prefix_length` is within `MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH`
/// - A custom starting prefix is never blank
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Total number of words to output, starting text included.
	word_count: usize,

	/// Number of words per chain key.
	prefix_length: usize,

	/// Custom starting text; `None` means the head of the corpus.
	starting_prefix: Option<String>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			word_count: DEFAULT_WORD_COUNT,
			prefix_length: DEFAULT_PREFIX_LENGTH,
			starting_prefix: None,
		}
	}
}

impl GenerationInput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn word_count(&self) -> usize {
		self.word_count
	}

	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	pub fn starting_prefix(&self) -> Option<&str> {
		self.starting_prefix.as_deref()
	}

	/// Sets the total number of words to output, starting text included.
	///
	/// # Errors
	/// Returns `InvalidParameter` if the value is outside `1..=10000`.
	pub fn set_word_count(&mut self, word_count: usize) -> Result<()> {
		if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
			return Err(MarkovError::InvalidParameter(format!(
				"number of words must be in between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}"
			)));
		}
		self.word_count = word_count;
		Ok(())
	}

	/// Sets the number of words per prefix.
	///
	/// # Errors
	/// Returns `InvalidParameter` if the value is outside `1..=5`.
	pub fn set_prefix_length(&mut self, prefix_length: usize) -> Result<()> {
		if !(MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix_length) {
			return Err(MarkovError::InvalidParameter(format!(
				"prefix length must be in between {MIN_PREFIX_LENGTH} and {MAX_PREFIX_LENGTH}"
			)));
		}
		self.prefix_length = prefix_length;
		Ok(())
	}

	/// Sets the text generation starts from.
	///
	/// The text is emitted verbatim at the head of the output.
	///
	/// # Errors
	/// Returns `InvalidStartingPrefix` if the text is empty or only whitespace.
	pub fn set_starting_prefix(&mut self, starting_prefix: &str) -> Result<()> {
		if starting_prefix.trim().is_empty() {
			return Err(MarkovError::InvalidStartingPrefix("starting prefix is empty".to_owned()));
		}
		self.starting_prefix = Some(starting_prefix.to_owned());
		Ok(())
	}

	/// Checks the parameters against each other and against the corpus and
	/// returns the starting text to use.
	///
	/// # Behavior
	/// - Fails with `InsufficientText` if the corpus has fewer words than
	///   the prefix length (`NoInput` if it has none at all)
	/// - Fails with `InvalidParameter` if the prefix length is not smaller
	///   than the word count
	/// - Without a custom starting prefix, uses the first `prefix_length`
	///   words of the corpus joined by single spaces
	/// - Fails with `InvalidStartingPrefix` if the starting text has fewer
	///   words than the prefix length, or more words than the word count
	pub fn resolve<S: AsRef<str>>(&self, words: &[S]) -> Result<String> {
		if words.is_empty() {
			return Err(MarkovError::NoInput);
		}
		if words.len() < self.prefix_length {
			return Err(MarkovError::InsufficientText {
				words: words.len(),
				prefix_length: self.prefix_length,
			});
		}
		if self.prefix_length >= self.word_count {
			return Err(MarkovError::InvalidParameter(
				"prefix length should be less than word count".to_owned(),
			));
		}

		let starting_prefix = match &self.starting_prefix {
			Some(s) => s.clone(),
			None => words[..self.prefix_length]
				.iter()
				.map(|w| w.as_ref())
				.collect::<Vec<&str>>()
				.join(" "),
		};

		let starting_words = starting_prefix.split_whitespace().count();
		if starting_words < self.prefix_length {
			return Err(MarkovError::InvalidStartingPrefix(format!(
				"starting prefix must have at least {} words, got {}",
				self.prefix_length, starting_words
			)));
		}
		if starting_words > self.word_count {
			return Err(MarkovError::InvalidStartingPrefix(format!(
				"starting prefix has {} words, more than the {} words requested",
				starting_words, self.word_count
			)));
		}

		debug!(
			"resolved input: word count {}, prefix length {}, starting prefix \"{}\"",
			self.word_count, self.prefix_length, starting_prefix
		);
		Ok(starting_prefix)
	}
}
