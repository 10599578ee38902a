use std::collections::HashMap;

use super::sampler::Sampler;

/// Follower table for a single predecessor token.
///
/// A `Successors` stores every observed transition from one predecessor
/// token to its immediate followers, weighted by occurrence count.
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate follower occurrences during the counting pass
/// - Merge with the table of the same predecessor from another partial
///   count (parallel counting support)
/// - Freeze into a `Sampler` once counting is finished
///
/// ## Invariants
/// - Each follower occurrence count is strictly positive
#[derive(Clone, Debug, Default)]
pub(crate) struct Successors {
	/// Follower occurrence counts, keyed by the follower token.
	/// Example: { "am" => 2, "do" => 1 }
	followers: HashMap<String, usize>,
}

impl Successors {
	/// Records an occurrence of a transition toward `follower`.
	///
	/// - If the follower was already observed, its count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub(crate) fn record(&mut self, follower: &str) {
		*self.followers.entry(follower.to_owned()).or_insert(0) += 1;
	}

	/// Merges another table for the same predecessor into this one.
	///
	/// Follower occurrence counts are summed. Intended for parallel
	/// counting, where partial tables are combined into a single one.
	pub(crate) fn merge(&mut self, other: Self) {
		for (follower, occurrence) in other.followers {
			*self.followers.entry(follower).or_insert(0) += occurrence;
		}
	}

	/// Returns the follower occurrence counts.
	pub(crate) fn counts(&self) -> &HashMap<String, usize> {
		&self.followers
	}

	/// Freezes the table into a categorical sampler over its followers.
	pub(crate) fn into_sampler(self) -> Sampler {
		Sampler::from_weights(self.followers)
	}
}
