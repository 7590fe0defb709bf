use clap::{CommandFactory, Parser};
use markov_core::error::MarkovError;
use markov_core::model::generation_input::GenerationInput;

/// Command-line flags.
///
/// Flags keep their historical spellings: a single dash with a one letter
/// name, or a double dash with the same letter (`-w` / `--w`).
/// Ranges are checked by the `GenerationInput` setters, not by clap, so
/// the messages match whatever way the parameters are supplied.
#[derive(Parser, Debug)]
#[command(
	name = "markovchain",
	about = "Markov Chain text generator.",
	override_usage = "markovchain [-w <N>] [-p <S>] [-l <N>]\n       markovchain --help",
	disable_help_flag = true,
	args_override_self = true
)]
struct Cli {
	/// Number of maximum words
	#[arg(short = 'w', long = "w", value_name = "N", allow_negative_numbers = true)]
	word_count: Option<i64>,

	/// Starting prefix
	#[arg(short = 'p', long = "p", value_name = "S", allow_hyphen_values = true)]
	starting_prefix: Option<String>,

	/// Prefix length
	#[arg(short = 'l', long = "l", value_name = "N", allow_negative_numbers = true)]
	prefix_length: Option<i64>,
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
pub enum Command {
	Help,
	Run(GenerationInput),
}

const HELP_FLAGS: [&str; 2] = ["--help", "-help"];
const VALUE_FLAGS: [&str; 6] = ["-w", "--w", "-p", "--p", "-l", "--l"];

/// Whether `arg` is one of the recognized flag tokens.
pub fn is_flag(arg: &str) -> bool {
	HELP_FLAGS.contains(&arg) || VALUE_FLAGS.contains(&arg)
}

/// Usage text, rendered from the flag definitions.
pub fn help() -> String {
	let mut command = Cli::command();
	format!("{}\n  --help  Show this screen.\n", command.render_help())
}

/// Parses the arguments following the program name.
///
/// # Behavior
/// - `--help` / `-help` anywhere wins over everything else
/// - `-w`, `-p` and `-l` (or their `--` forms) each take the next argument
/// - A later occurrence of a flag overrides an earlier one
///
/// # Errors
/// - `InvalidParameter` for an unknown argument, a value flag in last
///   position, or a non-numeric or out of range number
/// - `InvalidStartingPrefix` if the `-p` value is blank or is itself a flag
pub fn parse_args<I, S>(args: I) -> Result<Command, MarkovError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let args: Vec<String> = args.into_iter().map(|arg| arg.as_ref().to_owned()).collect();

	// clap would read `-help` as a cluster of short flags
	if args.iter().any(|arg| HELP_FLAGS.contains(&arg.as_str())) {
		return Ok(Command::Help);
	}
	let prefix_is_flag = args
		.windows(2)
		.any(|pair| matches!(pair[0].as_str(), "-p" | "--p") && is_flag(&pair[1]));
	if prefix_is_flag {
		return Err(MarkovError::InvalidStartingPrefix(
			"invalid value for the starting prefix".to_owned(),
		));
	}

	let cli = Cli::try_parse_from(std::iter::once("markovchain".to_owned()).chain(args))
		.map_err(invalid_parameter)?;

	let mut input = GenerationInput::new();
	if let Some(word_count) = cli.word_count {
		input.set_word_count(non_negative(word_count))?;
	}
	if let Some(prefix_length) = cli.prefix_length {
		input.set_prefix_length(non_negative(prefix_length))?;
	}
	if let Some(starting_prefix) = &cli.starting_prefix {
		input.set_starting_prefix(starting_prefix)?;
	}

	Ok(Command::Run(input))
}

/// Negative numbers map to `0` so the setter range check reports them.
fn non_negative(value: i64) -> usize {
	usize::try_from(value).unwrap_or(0)
}

/// Keeps the first line of a clap error, without its `error: ` tag.
fn invalid_parameter(e: clap::Error) -> MarkovError {
	let rendered = e.to_string();
	let message = rendered.lines().next().unwrap_or_default();
	MarkovError::InvalidParameter(message.trim_start_matches("error: ").to_owned())
}
