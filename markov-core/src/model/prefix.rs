use std::fmt;

/// A fixed-length window of words used as a Markov state key.
///
/// A `Prefix` is the word-level counterpart of an n-gram state key: the
/// `prefix_length` most recent words, in order. Two prefixes are equal when
/// they hold the same words in the same order, so a key built while scanning
/// the corpus and a key produced by sliding during generation always match.
///
/// # Invariants
/// - The number of words never changes after construction
/// - Words never contain whitespace (they come from whitespace splitting)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
	/// Window contents, oldest word first
	words: Vec<String>,
}

impl Prefix {
	/// Builds a prefix from an exact window of words.
	pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
		Self {
			words: words.iter().map(|w| w.as_ref().to_owned()).collect(),
		}
	}

	/// Builds a prefix from the last `len` words of `words`.
	///
	/// Used to seed generation when the starting text is longer than the
	/// prefix length. If `words` is shorter than `len`, all of it is used.
	pub fn from_tail<S: AsRef<str>>(words: &[S], len: usize) -> Self {
		let start = words.len().saturating_sub(len);
		Self::new(&words[start..])
	}

	/// Number of words in the window.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Advances the window: drops the oldest word and appends `next`.
	///
	/// The length is preserved. An empty prefix stays empty.
	pub fn slide(&mut self, next: &str) {
		if self.words.is_empty() {
			return;
		}
		self.words.remove(0);
		self.words.push(next.to_owned());
	}
}

impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}
