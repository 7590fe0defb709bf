use std::io::Write;

use log::{debug, trace, warn};
use rand::Rng;

use super::chain::Chain;
use super::prefix::Prefix;
use crate::error::{MarkovError, Result};

/// Random walk over a `Chain`.
///
/// # Responsibilities
/// - Own the random source for the whole run (seeded once by the caller)
/// - Validate the starting text against the chain before emitting anything
/// - Produce words one at a time, sliding the prefix after each
///
/// The next word depends only on the current prefix, never on what was
/// generated before it.
#[derive(Debug)]
pub struct Generator<'a, R> {
	/// Model walked by every pass
	chain: &'a Chain,

	/// Random source, seeded once and reused across walks
	rng: R,
}

/// Sliding prefix plus the number of words emitted so far.
#[derive(Debug)]
struct GenerationState {
	/// Current chain key
	prefix: Prefix,

	/// Words counted so far, starting text included
	emitted: usize,
}

/// One generation pass, yielding generated words.
///
/// The words of the starting text are counted as already emitted but are
/// not yielded. Iteration ends once `word_count` words are reached, or
/// right after yielding a `PrefixNotFound` error.
#[derive(Debug)]
pub struct Walk<'g, 'a, R> {
	/// Model being walked
	chain: &'a Chain,

	/// Borrowed from the `Generator` for the length of the pass
	rng: &'g mut R,

	/// Sliding key and emitted count
	state: GenerationState,

	/// Target length of the output, starting text included
	word_count: usize,

	/// Set once a dead end has been reported
	failed: bool,
}

impl<'a, R: Rng> Generator<'a, R> {
	pub fn new(chain: &'a Chain, rng: R) -> Self {
		Self { chain, rng }
	}

	/// Starts a walk from `starting_prefix`.
	///
	/// The chain key is the last `prefix_length` words of the starting text.
	///
	/// # Errors
	/// - `InvalidStartingPrefix` if the starting text yields an empty key
	/// - `PrefixNotFound` if that key has no recorded successors
	pub fn walk(&mut self, starting_prefix: &str, word_count: usize) -> Result<Walk<'_, 'a, R>> {
		let starting_words: Vec<&str> = starting_prefix.split_whitespace().collect();
		let prefix = Prefix::from_tail(&starting_words, self.chain.prefix_length());

		if prefix.is_empty() {
			return Err(MarkovError::InvalidStartingPrefix("starting prefix is empty".to_owned()));
		}
		if !self.chain.contains(&prefix) {
			return Err(MarkovError::PrefixNotFound { prefix: prefix.to_string() });
		}
		debug!("starting walk from \"{}\" towards {} words", prefix, word_count);

		Ok(Walk {
			chain: self.chain,
			rng: &mut self.rng,
			state: GenerationState { prefix, emitted: starting_words.len() },
			word_count,
			failed: false,
		})
	}

	/// Generates text and streams it to `out`.
	///
	/// The starting text is written verbatim, followed by each generated word
	/// preceded by a single space, and a final newline.
	///
	/// Returns the number of words in the output, starting text included.
	///
	/// # Errors
	/// - `PrefixNotFound` before anything is written if the starting prefix
	///   is unknown
	/// - `PrefixNotFound` mid-stream if the walk reaches a prefix with no
	///   successors; the text written so far is kept and terminated with a
	///   newline
	/// - `Io` if writing fails
	pub fn write_text<W: Write>(&mut self, starting_prefix: &str, word_count: usize, out: &mut W) -> Result<usize> {
		let mut walk = self.walk(starting_prefix, word_count)?;

		out.write_all(starting_prefix.as_bytes())?;
		for word in walk.by_ref() {
			match word {
				Ok(word) => write!(out, " {word}")?,
				Err(e) => {
					writeln!(out)?;
					out.flush()?;
					return Err(e);
				}
			}
		}
		writeln!(out)?;
		out.flush()?;

		Ok(walk.emitted())
	}
}

impl<R> Walk<'_, '_, R> {
	/// Words counted so far, starting text included.
	pub fn emitted(&self) -> usize {
		self.state.emitted
	}

	/// Current chain key.
	pub fn prefix(&self) -> &Prefix {
		&self.state.prefix
	}
}

impl<R: Rng> Iterator for Walk<'_, '_, R> {
	type Item = Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.state.emitted >= self.word_count {
			return None;
		}

		let word = match self.chain.predict(&self.state.prefix, &mut *self.rng) {
			Some(word) => word.to_owned(),
			None => {
				self.failed = true;
				warn!(
					"dead end at \"{}\" after {} of {} words",
					self.state.prefix, self.state.emitted, self.word_count
				);
				return Some(Err(MarkovError::PrefixNotFound { prefix: self.state.prefix.to_string() }));
			}
		};

		trace!("\"{}\" -> \"{}\"", self.state.prefix, word);
		self.state.prefix.slide(&word);
		self.state.emitted += 1;
		Some(Ok(word))
	}
}
