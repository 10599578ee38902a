use rand::Rng;

/// A frozen categorical distribution over tokens.
///
/// A `Sampler` is built once from raw occurrence weights and then only
/// queried. Entries are kept in a list sorted by token, so tokens with
/// equal weight always resolve in the same order and draws are
/// reproducible under a seeded random source.
///
/// ## Invariants
/// - `total` equals the sum of all entry weights
/// - Entries are sorted by token and never mutated after construction
#[derive(Clone, Debug)]
pub(crate) struct Sampler {
	/// `(token, weight)` pairs, sorted by token.
	entries: Vec<(String, usize)>,

	/// Sum of all weights.
	total: usize,
}

impl Sampler {
	/// Freezes a distribution from raw occurrence weights.
	pub(crate) fn from_weights<I>(weights: I) -> Self
	where
		I: IntoIterator<Item = (String, usize)>,
	{
		let mut entries: Vec<(String, usize)> = weights.into_iter().collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		let total = entries.iter().map(|(_, weight)| weight).sum();
		Self { entries, total }
	}

	/// Draws one token using weighted random sampling.
	///
	/// The probability of selecting a token is proportional to its weight.
	///
	/// This method performs:
	/// - an O(n) scan over the entries
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the distribution is empty.
	pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.total == 0 {
			return None;
		}

		// r < total, so the scan always lands in a bucket
		let mut r = rng.random_range(0..self.total);
		for (token, weight) in &self.entries {
			if r < *weight {
				return Some(token);
			}
			r -= weight;
		}

		self.entries.last().map(|(token, _)| token.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_distribution_yields_none() {
		let sampler = Sampler::from_weights(Vec::new());
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(sampler.sample(&mut rng), None);
	}

	#[test]
	fn single_entry_always_drawn() {
		let sampler = Sampler::from_weights(vec![("only".to_owned(), 3)]);
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..20 {
			assert_eq!(sampler.sample(&mut rng), Some("only"));
		}
	}

	#[test]
	fn draws_stay_within_entries() {
		let sampler = Sampler::from_weights(vec![
			("a".to_owned(), 1),
			("b".to_owned(), 2),
			("c".to_owned(), 7),
		]);
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..100 {
			let token = sampler.sample(&mut rng).unwrap();
			assert!(matches!(token, "a" | "b" | "c"));
		}
	}

	#[test]
	fn seeded_draws_are_reproducible() {
		let weights = vec![
			("x".to_owned(), 5),
			("y".to_owned(), 5),
			("z".to_owned(), 5),
		];
		// Same weights handed over in a different order freeze to the
		// same sorted distribution.
		let mut reversed = weights.clone();
		reversed.reverse();

		let first = Sampler::from_weights(weights);
		let second = Sampler::from_weights(reversed);

		let mut rng_a = StdRng::seed_from_u64(123);
		let mut rng_b = StdRng::seed_from_u64(123);
		for _ in 0..50 {
			assert_eq!(
				first.sample(&mut rng_a).map(str::to_owned),
				second.sample(&mut rng_b).map(str::to_owned)
			);
		}
	}
}
