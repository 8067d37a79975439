use std::collections::BTreeSet;

/// Accumulator of unique strings built up during generation.
///
/// ## Invariants
/// - No duplicate entries (insertion of an existing string is refused)
/// - Iteration and `into_sorted` yield strings in ascending lexicographic order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringSet {
	strings: BTreeSet<String>,
}

impl StringSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `s`, returning `false` if it was already present.
	pub fn insert(&mut self, s: String) -> bool {
		self.strings.insert(s)
	}

	pub fn contains(&self, s: &str) -> bool {
		self.strings.contains(s)
	}

	pub fn len(&self) -> usize {
		self.strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}

	/// Consumes the set and returns its members sorted ascending.
	pub fn into_sorted(self) -> Vec<String> {
		self.strings.into_iter().collect()
	}
}

impl FromIterator<String> for StringSet {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self { strings: iter.into_iter().collect() }
	}
}
