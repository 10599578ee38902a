use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use rand::Rng;
use tracing::debug;

use super::corpus::{END_TOKEN, START_TOKEN};
use super::sampler::Sampler;
use super::successors::Successors;
use super::unigram::{Unigram, UnigramCounter};

/// Accumulating pair counter used during the counting phase.
///
/// Counts unigrams and adjacent pairs in the same pass over each sentence,
/// so conditional-probability denominators always come from the same
/// sentence sequence as the pair counts.
#[derive(Clone, Debug, Default)]
struct BigramCounter {
	/// Token counts for the conditional denominators.
	unigrams: UnigramCounter,

	/// Follower tables, keyed by the predecessor token.
	states: HashMap<String, Successors>,
}

impl BigramCounter {
	/// Counts every token and every adjacent ordered pair of a sentence.
	fn add_sentence(&mut self, sentence: &[String]) {
		self.unigrams.add_sentence(sentence);

		for pair in sentence.windows(2) {
			self.states
				.entry(pair[0].clone())
				.or_default()
				.record(&pair[1]);
		}
	}

	/// Merges another partial counter into this one.
	fn merge(&mut self, other: Self) {
		self.unigrams.merge(other.unigrams);
		for (predecessor, table) in other.states {
			self.states.entry(predecessor).or_default().merge(table);
		}
	}
}

/// Maximum-likelihood bigram model over a tokenized sentence sequence.
///
/// A `Bigram` composes a fully built `Unigram`: the conditional probability
/// of a pair `(a, b)` is `count(a, b) / unigram_count(a)`, normalized by
/// how often the predecessor occurred overall, not by a pair total.
///
/// # Responsibilities
/// - Count every adjacent ordered token pair across all sentences
/// - Derive conditional probabilities `P(b | a)` from pair and unigram counts
/// - Generate token sequences by Markov chaining from the start token
///
/// # Invariants
/// - Unigram counts are fully merged before any conditional probability is
///   computed; every counted predecessor therefore has a nonzero denominator
/// - Pairs never observed have no entry, not a zero-valued one
/// - For every predecessor `a` in `counts()`, the probabilities of its
///   observed followers sum to 1.0 (floating-point tolerance aside)
/// - Immutable once constructed
#[derive(Clone, Debug)]
pub struct Bigram {
	/// The unigram model computed from the same sentence sequence.
	unigram: Unigram,

	/// Co-occurrence count per ordered pair.
	counts: HashMap<(String, String), usize>,

	/// Conditional probability per ordered pair.
	probs: HashMap<(String, String), f64>,

	/// Frozen per-predecessor distributions for `generate`.
	samplers: HashMap<String, Sampler>,
}

impl Bigram {
	/// Builds a bigram model from a tokenized sentence sequence.
	///
	/// # Behavior
	/// - Splits the sentences into chunks (based on CPU cores * factor).
	/// - Spawns threads counting each chunk into a partial counter; each
	///   pass counts unigrams and adjacent pairs together.
	/// - Merges all partial counters, then normalizes: unigram
	///   probabilities first, conditional pair probabilities second.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial counters from threads.
	/// - An empty sentence sequence yields an empty model.
	pub fn from_sentences(sentences: &[Vec<String>]) -> Self {
		if sentences.is_empty() {
			return Self::from_counter(BigramCounter::default());
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = ((sentences.len() + chunks - 1) / chunks).max(1);

		let (tx, rx) = mpsc::channel();
		for chunk in sentences.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<Vec<String>> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial = BigramCounter::default();
				for sentence in &chunk {
					partial.add_sentence(sentence);
				}
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut counter = BigramCounter::default();
		for partial in rx.iter() {
			counter.merge(partial);
		}

		Self::from_counter(counter)
	}

	/// Normalizes a fully merged counter into an immutable model.
	fn from_counter(counter: BigramCounter) -> Self {
		let BigramCounter { unigrams, states } = counter;
		let unigram = Unigram::from_counter(unigrams);

		let mut counts = HashMap::new();
		let mut probs = HashMap::new();
		for (predecessor, table) in &states {
			// P(b|a) = C(a,b) / C(a); the predecessor of every counted
			// pair was counted as a unigram in the same pass.
			let predecessor_count = unigram.counts()[predecessor.as_str()];

			for (follower, occurrence) in table.counts() {
				let pair = (predecessor.clone(), follower.clone());
				counts.insert(pair.clone(), *occurrence);
				probs.insert(pair, *occurrence as f64 / predecessor_count as f64);
			}
		}

		let samplers: HashMap<String, Sampler> = states
			.into_iter()
			.map(|(predecessor, table)| (predecessor, table.into_sampler()))
			.collect();

		debug!(pairs = counts.len(), predecessors = samplers.len(), "bigram model built");

		Self { unigram, counts, probs, samplers }
	}

	/// Returns the unigram model computed from the same sentences.
	pub fn unigram(&self) -> &Unigram {
		&self.unigram
	}

	/// Returns the co-occurrence count per ordered pair.
	///
	/// Pairs never observed have no entry.
	pub fn counts(&self) -> &HashMap<(String, String), usize> {
		&self.counts
	}

	/// Returns the conditional probability per ordered pair.
	pub fn probs(&self) -> &HashMap<(String, String), f64> {
		&self.probs
	}

	/// Returns the co-occurrence count of `(predecessor, follower)`, if observed.
	pub fn pair_count(&self, predecessor: &str, follower: &str) -> Option<usize> {
		self.counts
			.get(&(predecessor.to_owned(), follower.to_owned()))
			.copied()
	}

	/// Returns `P(follower | predecessor)`, if the pair was observed.
	pub fn cond_prob(&self, predecessor: &str, follower: &str) -> Option<f64> {
		self.probs
			.get(&(predecessor.to_owned(), follower.to_owned()))
			.copied()
	}

	/// Generates a token sequence by Markov chaining from the start token.
	///
	/// Every call is an independent generation using the process random
	/// source. See `generate_with` for the chaining rules.
	pub fn generate(&self, max_len: usize) -> Vec<String> {
		self.generate_with(&mut rand::rng(), max_len)
	}

	/// Generates a token sequence using the provided random source.
	///
	/// # Behavior
	/// - The predecessor is seeded with `<s>`.
	/// - Each step draws a follower from the current predecessor's
	///   conditional distribution; the follower becomes the predecessor.
	/// - Stops when `</s>` is drawn, when the predecessor has no observed
	///   followers, or when `max_len` tokens have been emitted.
	/// - Boundary tokens are not part of the returned sequence.
	///
	/// # Notes
	/// - Corpora built without boundary markers have no `<s>` predecessor,
	///   so generation over them yields an empty sequence.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, max_len: usize) -> Vec<String> {
		let mut sequence = Vec::new();
		let mut predecessor = START_TOKEN.to_owned();

		while sequence.len() < max_len {
			let follower = match self
				.samplers
				.get(&predecessor)
				.and_then(|sampler| sampler.sample(rng))
			{
				Some(follower) => follower.to_owned(),
				None => break,
			};

			if follower == END_TOKEN {
				break;
			}

			sequence.push(follower.clone());
			predecessor = follower;
		}

		sequence
	}
}
