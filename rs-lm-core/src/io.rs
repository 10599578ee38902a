use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads through a buffered reader, one line at a time
/// - Line terminators (`\n` / `\r\n`) are not included
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let file = File::open(filename)?;
	BufReader::new(file).lines().collect()
}
