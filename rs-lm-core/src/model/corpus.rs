use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::io::read_lines;

/// Start-of-sentence boundary token.
pub const START_TOKEN: &str = "<s>";

/// End-of-sentence boundary token.
pub const END_TOKEN: &str = "</s>";

/// Represents a tokenized text corpus read from a newline-delimited file.
///
/// The `Corpus` turns each line of the source file into an ordered token
/// sequence and accumulates the vocabulary and sentence count along the way.
///
/// # Responsibilities
/// - Read a UTF-8 text file, one sentence per line
/// - Split lines on whitespace and lower-case every token
/// - Optionally wrap each sentence with `<s>` / `</s>` boundary tokens
/// - Track the vocabulary and the number of sentences processed
///
/// # Invariants
/// - Built once at construction; read-only afterward
/// - With markers enabled, every sentence starts with `<s>` and ends with
///   `</s>` exactly once
/// - The reported vocabulary always contains both boundary tokens, even
///   when insertion is disabled, so `num_unique_words()` is at least 2
///
/// # Notes
/// - An unreadable file is logged and yields an empty corpus rather than an
///   error; callers check `num_sentences() == 0` to detect the failure.
#[derive(Clone, Debug)]
pub struct Corpus {
	/// Source file path.
	path: PathBuf,

	/// Tokenized sentences, in file order.
	sentences: Vec<Vec<String>>,

	/// Distinct tokens observed, plus the two boundary tokens.
	vocab: HashSet<String>,

	/// Number of lines processed, blank lines included.
	num_sentences: usize,
}

impl Corpus {
	/// Loads a corpus with both boundary markers enabled.
	///
	/// Equivalent to `with_markers(path, true, true)`.
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self::with_markers(path, true, true)
	}

	/// Loads a corpus with explicit control over boundary insertion.
	///
	/// # Parameters
	/// - `path`: Newline-delimited UTF-8 text file, one sentence per line.
	/// - `add_bos`: Prepend `<s>` to every sentence.
	/// - `add_eos`: Append `</s>` to every sentence.
	///
	/// # Behavior
	/// - Every line counts as one sentence, blank lines included. A blank
	///   line yields just the enabled boundary tokens (or an empty sequence
	///   if both are disabled).
	/// - Tokens are lower-cased before entering the vocabulary or a
	///   sentence; the boundary tokens are inserted verbatim.
	/// - `</s>` is appended before `<s>` is prepended, so the markers never
	///   swap places.
	///
	/// # Notes
	/// - If the file cannot be opened or read, the failure is logged and an
	///   empty corpus is returned.
	pub fn with_markers<P: AsRef<Path>>(path: P, add_bos: bool, add_eos: bool) -> Self {
		let mut corpus = Self {
			path: path.as_ref().to_path_buf(),
			sentences: Vec::new(),
			vocab: HashSet::new(),
			num_sentences: 0,
		};

		// The vocabulary reports both boundary tokens unconditionally.
		corpus.vocab.insert(START_TOKEN.to_owned());
		corpus.vocab.insert(END_TOKEN.to_owned());

		let lines = match read_lines(&corpus.path) {
			Ok(lines) => lines,
			Err(e) => {
				error!(path = %corpus.path.display(), error = %e, "failed to read corpus file");
				return corpus;
			}
		};

		for line in lines {
			corpus.num_sentences += 1;

			let mut tokens: Vec<String> = line
				.split_whitespace()
				.map(str::to_lowercase)
				.collect();

			for token in &tokens {
				corpus.vocab.insert(token.clone());
			}

			if add_eos {
				tokens.push(END_TOKEN.to_owned());
			}
			if add_bos {
				tokens.insert(0, START_TOKEN.to_owned());
			}

			corpus.sentences.push(tokens);
		}

		debug!(
			path = %corpus.path.display(),
			sentences = corpus.num_sentences,
			vocab = corpus.vocab.len(),
			"corpus loaded"
		);

		corpus
	}

	/// Returns the tokenized sentences, in file order.
	pub fn sentences(&self) -> &[Vec<String>] {
		&self.sentences
	}

	/// Returns the vocabulary.
	///
	/// Both boundary tokens are always present, whether or not boundary
	/// insertion was enabled.
	pub fn vocab(&self) -> &HashSet<String> {
		&self.vocab
	}

	/// Returns the number of distinct tokens, boundary tokens included.
	pub fn num_unique_words(&self) -> usize {
		self.vocab.len()
	}

	/// Returns the number of lines processed, blank lines included.
	pub fn num_sentences(&self) -> usize {
		self.num_sentences
	}

	/// Returns the source file path.
	pub fn path(&self) -> &Path {
		&self.path
	}
}
