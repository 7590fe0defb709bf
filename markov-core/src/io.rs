use std::io::{self, Read};

/// Reads a whole stream and splits it into words.
///
/// - Reads everything into memory
/// - Splits on runs of whitespace, line breaks included
/// - Invalid UTF-8 sequences are replaced rather than rejected
pub fn read_words<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
	let mut contents = Vec::new();
	reader.read_to_end(&mut contents)?;
	Ok(tokenize(&String::from_utf8_lossy(&contents)))
}

/// Splits text into whitespace-separated words.
///
/// Example:
/// `"the  cat\nsat"` → `["the", "cat", "sat"]`
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}
