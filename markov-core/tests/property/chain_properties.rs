use markov_core::model::chain::Chain;
use markov_core::model::generator::Generator;
use markov_core::model::prefix::Prefix;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn corpus() -> impl Strategy<Value = Vec<String>> {
	// small vocabulary so prefixes repeat
	prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..80)
		.prop_map(|words| words.into_iter().map(str::to_owned).collect::<Vec<String>>())
}

proptest! {
	#[test]
	fn transition_count_matches_corpus(words in corpus(), prefix_length in 1usize..=5) {
		let chain = Chain::build(&words, prefix_length);
		let expected = words.len().saturating_sub(prefix_length);
		prop_assert_eq!(chain.transition_count(), expected);
	}

	#[test]
	fn successors_follow_their_prefix(words in corpus(), prefix_length in 1usize..=5) {
		let chain = Chain::build(&words, prefix_length);
		for (prefix, successors) in chain.iter() {
			prop_assert_eq!(prefix.len(), prefix_length);
			for successor in successors {
				let observed = words
					.windows(prefix_length + 1)
					.any(|w| w[..prefix_length] == *prefix.words() && &w[prefix_length] == successor);
				prop_assert!(observed, "{} -> {} never observed", prefix, successor);
			}
		}
	}

	#[test]
	fn building_twice_gives_the_same_chain(words in corpus(), prefix_length in 1usize..=5) {
		prop_assert_eq!(Chain::build(&words, prefix_length), Chain::build(&words, prefix_length));
	}

	#[test]
	fn successful_generation_emits_exactly_word_count(
		words in corpus(),
		prefix_length in 1usize..=3,
		word_count in 4usize..200,
		seed in any::<u64>(),
	) {
		prop_assume!(words.len() > prefix_length);
		let chain = Chain::build(&words, prefix_length);
		let starting_prefix = words[..prefix_length].join(" ");
		let mut generator = Generator::new(&chain, StdRng::seed_from_u64(seed));
		let mut out = Vec::new();

		if let Ok(count) = generator.write_text(&starting_prefix, word_count, &mut out) {
			let text = String::from_utf8(out).unwrap();
			prop_assert_eq!(count, word_count);
			prop_assert_eq!(text.split_whitespace().count(), word_count);
			prop_assert!(text.ends_with('\n') && !text.ends_with(" \n"));
		}
	}

	#[test]
	fn generated_words_come_from_the_chain(
		words in corpus(),
		prefix_length in 1usize..=3,
		seed in any::<u64>(),
	) {
		prop_assume!(words.len() > prefix_length);
		let chain = Chain::build(&words, prefix_length);
		let mut generator = Generator::new(&chain, StdRng::seed_from_u64(seed));
		let mut walk = generator.walk(&words[..prefix_length].join(" "), 50).unwrap();

		loop {
			let prefix: Prefix = walk.prefix().clone();
			match walk.next() {
				Some(Ok(word)) => {
					let successors = chain.successors(&prefix).unwrap();
					prop_assert!(successors.contains(&word));
				}
				Some(Err(_)) => prop_assert!(!chain.contains(&prefix)),
				None => break,
			}
		}
	}
}
