use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the generator.
pub type GenResult<T> = Result<T, GenError>;

/// Everything that can go wrong while generating, writing or checking fixtures.
#[derive(Debug, Error)]
pub enum GenError {
	/// A generated set must contain at least one string.
	#[error("string count must be >= 1")]
	InvalidCount,

	/// Length bounds are empty or start at zero.
	#[error("invalid length bounds: min_len = {min_len}, max_len = {max_len} (need 1 <= min_len <= max_len)")]
	InvalidLength { min_len: usize, max_len: usize },

	/// Overlap probability outside [0.0, 1.0].
	#[error("overlap probability must be between 0.0 and 1.0, got {0}")]
	InvalidProbability(f64),

	/// More unique strings requested than the length bounds can hold.
	#[error("infeasible parameters: {requested} unique strings requested but only {capacity} exist")]
	Infeasible { requested: usize, capacity: usize },

	/// Rejection sampling gave up after too many consecutive duplicates.
	#[error("infeasible parameters: gave up after {attempts} consecutive rejected candidates ({accepted}/{requested} strings accepted)")]
	AttemptsExhausted {
		accepted: usize,
		requested: usize,
		attempts: usize,
	},

	/// The permutation base would produce an unreasonable number of strings.
	#[error("permutation base has {len} symbols, at most {max} are supported")]
	PermutationBaseTooLong { len: usize, max: usize },

	/// A fixture file does not follow the count-then-records format.
	#[error("malformed input file at line {line}: {reason}")]
	MalformedInputFile { line: usize, reason: String },

	/// The fixture catalog could not be loaded.
	#[error("invalid catalog: {0}")]
	Catalog(String),

	#[error("{}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl GenError {
	/// Wraps an I/O error with the path it happened on.
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
