use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use rand::Rng;
use tracing::debug;

use super::sampler::Sampler;

/// Accumulating token counter used during the counting phase.
///
/// A `UnigramCounter` is the mutable half of unigram construction: it only
/// counts. Probabilities are derived later, once every partial counter has
/// been merged, so the total below is always the global denominator.
#[derive(Clone, Debug, Default)]
pub(crate) struct UnigramCounter {
	/// Occurrence count per token.
	counts: HashMap<String, usize>,

	/// Total token occurrences, boundary tokens included.
	total: usize,
}

impl UnigramCounter {
	/// Counts every token of a tokenized sentence.
	pub(crate) fn add_sentence(&mut self, sentence: &[String]) {
		for token in sentence {
			self.total += 1;
			*self.counts.entry(token.clone()).or_insert(0) += 1;
		}
	}

	/// Merges another partial counter into this one.
	///
	/// Occurrence counts and totals are summed. Intended for parallel
	/// counting, where per-chunk counters are combined into a single one.
	pub(crate) fn merge(&mut self, other: Self) {
		for (token, occurrence) in other.counts {
			*self.counts.entry(token).or_insert(0) += occurrence;
		}
		self.total += other.total;
	}
}

/// Maximum-likelihood unigram model over a tokenized sentence sequence.
///
/// # Responsibilities
/// - Count every token occurrence across all sentences
/// - Derive each token's probability as `count / total`
/// - Draw single tokens from the resulting categorical distribution
///
/// # Invariants
/// - Counting finishes before any probability is computed; the total is a
///   global denominator
/// - Every stored count is >= 1; unobserved tokens have no entry at all
/// - Probabilities over all stored tokens sum to 1.0 (floating-point
///   tolerance aside)
/// - Immutable once constructed
#[derive(Clone, Debug)]
pub struct Unigram {
	/// Occurrence count per token.
	counts: HashMap<String, usize>,

	/// Maximum-likelihood probability per token.
	probs: HashMap<String, f64>,

	/// Total token occurrences across the whole sentence sequence.
	total_count: usize,

	/// Frozen distribution for `generate`.
	sampler: Sampler,
}

impl Unigram {
	/// Builds a unigram model from a tokenized sentence sequence.
	///
	/// # Behavior
	/// - Splits the sentences into chunks (based on CPU cores * factor).
	/// - Spawns threads to count each chunk into a partial counter.
	/// - Merges all partial counters, then normalizes the merged counts.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial counters from threads.
	/// - An empty sentence sequence yields an empty model.
	pub fn from_sentences(sentences: &[Vec<String>]) -> Self {
		if sentences.is_empty() {
			return Self::from_counter(UnigramCounter::default());
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
				let mut partial = UnigramCounter::default();
				for sentence in &chunk {
					partial.add_sentence(sentence);
				}
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut counter = UnigramCounter::default();
		for partial in rx.iter() {
			counter.merge(partial);
		}

		Self::from_counter(counter)
	}

	/// Normalizes a fully merged counter into an immutable model.
	///
	/// The counter must carry the counts of the whole sentence sequence:
	/// its total becomes the denominator of every probability.
	pub(crate) fn from_counter(counter: UnigramCounter) -> Self {
		let UnigramCounter { counts, total } = counter;

		let probs = counts
			.iter()
			.map(|(token, occurrence)| (token.clone(), *occurrence as f64 / total as f64))
			.collect();

		let sampler = Sampler::from_weights(
			counts.iter().map(|(token, occurrence)| (token.clone(), *occurrence)),
		);

		debug!(tokens = counts.len(), total, "unigram model built");

		Self { counts, probs, total_count: total, sampler }
	}

	/// Returns the occurrence count per token.
	///
	/// Tokens never observed have no entry.
	pub fn counts(&self) -> &HashMap<String, usize> {
		&self.counts
	}

	/// Returns the maximum-likelihood probability per token.
	pub fn probs(&self) -> &HashMap<String, f64> {
		&self.probs
	}

	/// Returns the total token occurrences, boundary tokens included.
	pub fn total_count(&self) -> usize {
		self.total_count
	}

	/// Returns the occurrence count of a single token, if observed.
	pub fn count(&self, token: &str) -> Option<usize> {
		self.counts.get(token).copied()
	}

	/// Returns the probability of a single token, if observed.
	pub fn prob(&self, token: &str) -> Option<f64> {
		self.probs.get(token).copied()
	}

	/// Draws one token from the model's categorical distribution.
	///
	/// Every call is an independent draw. Returns `None` on an empty model.
	pub fn generate(&self) -> Option<&str> {
		self.generate_with(&mut rand::rng())
	}

	/// Draws one token using the provided random source.
	///
	/// Seeding the source makes draws reproducible.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.sampler.sample(rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sentence(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|t| t.to_string()).collect()
	}

	#[test]
	fn counter_merge_sums_counts_and_totals() {
		let mut left = UnigramCounter::default();
		left.add_sentence(&sentence(&["a", "b", "a"]));

		let mut right = UnigramCounter::default();
		right.add_sentence(&sentence(&["b", "c"]));

		left.merge(right);

		assert_eq!(left.counts.get("a"), Some(&2));
		assert_eq!(left.counts.get("b"), Some(&2));
		assert_eq!(left.counts.get("c"), Some(&1));
		assert_eq!(left.total, 5);
	}

	#[test]
	fn normalization_uses_the_merged_total() {
		let mut counter = UnigramCounter::default();
		counter.add_sentence(&sentence(&["a", "a", "b", "c"]));

		let model = Unigram::from_counter(counter);

		assert_eq!(model.total_count(), 4);
		assert_eq!(model.prob("a"), Some(0.5));
		assert_eq!(model.prob("b"), Some(0.25));
		assert_eq!(model.prob("d"), None);
	}

	#[test]
	fn empty_model_generates_nothing() {
		let model = Unigram::from_sentences(&[]);
		assert_eq!(model.total_count(), 0);
		assert!(model.counts().is_empty());
		assert_eq!(model.generate(), None);
	}
}
