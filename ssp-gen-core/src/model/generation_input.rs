use crate::error::{GenError, GenResult};

/// Default number of consecutive rejected candidates tolerated before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Parameters for the overlapping string generator.
///
/// `GenerationInput` holds the **shape** of the requested set (count, length
/// bounds, overlap probability), which is validated on construction, and the
/// retry budget, which callers may adjust freely.
///
/// # Invariants
/// - `count >= 1`
/// - `1 <= min_len <= max_len`
/// - `overlap_prob` lies in `[0.0, 1.0]`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	count: usize,
	min_len: usize,
	max_len: usize,
	overlap_prob: f64,

	/// Consecutive rejected candidates allowed before failing (0 behaves as 1).
	pub max_attempts: usize,
}

impl GenerationInput {
	/// Creates a validated input with the default retry budget.
	///
	/// # Errors
	/// - `InvalidCount` if `count == 0`
	/// - `InvalidLength` if `min_len == 0` or `min_len > max_len`
	/// - `InvalidProbability` if `overlap_prob` is outside `[0.0, 1.0]` (or NaN)
	pub fn new(count: usize, min_len: usize, max_len: usize, overlap_prob: f64) -> GenResult<Self> {
		if count == 0 {
			return Err(GenError::InvalidCount);
		}
		if min_len == 0 || min_len > max_len {
			return Err(GenError::InvalidLength { min_len, max_len });
		}
		let mut input = Self {
			count,
			min_len,
			max_len,
			overlap_prob: 0.0,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		};
		input.set_overlap_prob(overlap_prob)?;
		Ok(input)
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn min_len(&self) -> usize {
		self.min_len
	}

	pub fn max_len(&self) -> usize {
		self.max_len
	}

	pub fn overlap_prob(&self) -> f64 {
		self.overlap_prob
	}

	/// Sets the overlap probability (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_overlap_prob(&mut self, overlap_prob: f64) -> GenResult<()> {
		if !(0.0..=1.0).contains(&overlap_prob) {
			return Err(GenError::InvalidProbability(overlap_prob));
		}
		self.overlap_prob = overlap_prob;
		Ok(())
	}

	/// Builder-style override of the retry budget.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}
}
