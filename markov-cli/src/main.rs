mod args;

use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

use log::info;
use markov_core::error::MarkovError;
use markov_core::io::read_words;
use markov_core::model::chain::Chain;
use markov_core::model::generator::Generator;
use rand::SeedableRng;
use rand::rngs::StdRng;

use args::{Command, parse_args};

fn main() -> ExitCode {
	env_logger::init();

	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<(), MarkovError> {
	let input = match parse_args(std::env::args().skip(1))? {
		Command::Help => {
			print!("{}", args::help());
			return Ok(());
		}
		Command::Run(input) => input,
	};

	// Text must come from a file or a pipe
	let stdin = io::stdin();
	if stdin.is_terminal() {
		return Err(MarkovError::NoInput);
	}
	let words = read_words(stdin.lock())?;
	let starting_prefix = input.resolve(&words)?;

	let chain = Chain::build(&words, input.prefix_length());
	let mut generator = Generator::new(&chain, StdRng::from_os_rng());

	let mut out = BufWriter::new(io::stdout().lock());
	let emitted = generator.write_text(&starting_prefix, input.word_count(), &mut out)?;
	info!("generated {} words", emitted);

	Ok(())
}
