use crate::error::{GenError, GenResult};

/// Longest base accepted by `generate_permutations` (10! = 3 628 800 strings).
pub const MAX_PERMUTATION_BASE: usize = 10;

/// Returns every distinct rearrangement of `base`, sorted ascending.
///
/// Walks the permutations in lexicographic order starting from the sorted
/// symbols, so repeated symbols never produce duplicates and the output is
/// sorted without an extra pass. Deterministic, no randomness involved.
///
/// # Errors
/// Returns `PermutationBaseTooLong` if `base` has more than
/// `MAX_PERMUTATION_BASE` symbols.
pub fn generate_permutations(base: &str) -> GenResult<Vec<String>> {
	let mut symbols: Vec<char> = base.chars().collect();
	if symbols.len() > MAX_PERMUTATION_BASE {
		return Err(GenError::PermutationBaseTooLong {
			len: symbols.len(),
			max: MAX_PERMUTATION_BASE,
		});
	}

	symbols.sort_unstable();
	let mut permutations = vec![symbols.iter().collect::<String>()];
	while next_permutation(&mut symbols) {
		permutations.push(symbols.iter().collect());
	}
	Ok(permutations)
}

/// Advances `items` to the next lexicographic permutation.
///
/// Returns `false` (leaving `items` untouched) once the last one is reached.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
	if items.len() < 2 {
		return false;
	}

	// Longest non-increasing suffix
	let mut pivot = items.len() - 1;
	while pivot > 0 && items[pivot - 1] >= items[pivot] {
		pivot -= 1;
	}
	if pivot == 0 {
		return false;
	}

	let mut successor = items.len() - 1;
	while items[successor] <= items[pivot - 1] {
		successor -= 1;
	}
	items.swap(pivot - 1, successor);
	items[pivot..].reverse();
	true
}
