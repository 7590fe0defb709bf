use std::io;

/// Every condition that aborts a generation run.
///
/// None of these are recoverable: the caller reports the message and
/// terminates. Output already written before a `PrefixNotFound` raised
/// mid-walk stays written.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	#[error("no input detected, provide input via a file or pipe")]
	NoInput,

	#[error("not enough words to generate the text ({words} words, prefix length {prefix_length})")]
	InsufficientText { words: usize, prefix_length: usize },

	#[error("{0}")]
	InvalidParameter(String),

	#[error("{0}")]
	InvalidStartingPrefix(String),

	#[error("suffix for prefix \"{prefix}\" not found")]
	PrefixNotFound { prefix: String },

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
