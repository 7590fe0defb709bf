use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the binary with `input` piped to stdin.
fn markovchain(args: &[&str], input: &str) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_markovchain"))
		.args(args)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();

	// the process may exit before reading stdin
	if let Some(mut stdin) = child.stdin.take() {
		let _ = stdin.write_all(input.as_bytes());
	}
	child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
	String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn generates_requested_words_with_single_newline() {
	// every prefix has exactly one successor
	let output = markovchain(&["-w", "5"], "a b c a b c a b");

	assert_eq!(output.status.code(), Some(0));
	assert_eq!(stdout(&output), "a b c a b\n");
	assert!(stderr(&output).is_empty());
}

#[test]
fn default_word_count_is_one_hundred() {
	let output = markovchain(&[], "a b c a b c a b");

	assert_eq!(output.status.code(), Some(0));
	let text = stdout(&output);
	assert_eq!(text.split_whitespace().count(), 100);
	assert!(text.ends_with('\n') && !text.ends_with(" \n"));
}

#[test]
fn custom_starting_prefix_is_echoed() {
	let output = markovchain(&["-l", "2", "-p", "the cat", "-w", "4"], "the cat sat on the mat the cat ran");
	let text = stdout(&output);

	assert!(text.starts_with("the cat sat ") || text.starts_with("the cat ran"), "{text:?}");
}

#[test]
fn help_prints_usage_and_succeeds() {
	for flag in ["--help", "-help"] {
		let output = markovchain(&[flag], "");
		assert_eq!(output.status.code(), Some(0));
		assert!(stdout(&output).contains("Usage"), "{}", stdout(&output));
		assert!(stderr(&output).is_empty());
	}
}

#[test]
fn invalid_parameter_reports_on_stderr() {
	let output = markovchain(&["-w", "1", "-l", "1"], "a b c");

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
	assert!(stderr(&output).starts_with("Error: "), "{}", stderr(&output));
}

#[test]
fn empty_input_is_no_input() {
	let output = markovchain(&[], "");

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
	assert!(stderr(&output).contains("no input"), "{}", stderr(&output));
}

#[test]
fn input_shorter_than_prefix_fails() {
	let output = markovchain(&["-l", "2"], "a");

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("not enough words"), "{}", stderr(&output));
}

#[test]
fn unknown_starting_prefix_emits_nothing() {
	let output = markovchain(&["-l", "2", "-p", "x y"], "a b c");

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
	assert_eq!(stderr(&output), "Error: suffix for prefix \"x y\" not found\n");
}

#[test]
fn dead_end_keeps_partial_output() {
	let output = markovchain(&["-w", "10"], "a b c");

	assert_eq!(output.status.code(), Some(1));
	assert_eq!(stdout(&output), "a b c\n");
	assert_eq!(stderr(&output), "Error: suffix for prefix \"b c\" not found\n");
}
