use std::cmp::min;

use rand::Rng;

use super::alphabet::{capacity, push_random, random_string};
use super::generation_input::GenerationInput;
use super::string_set::StringSet;
use crate::error::{GenError, GenResult};

/// Shortest suffix borrowed from the previous string.
const MIN_OVERLAP: usize = 2;
/// Longest suffix borrowed from the previous string.
const MAX_OVERLAP: usize = 5;
/// Previous strings shorter than this never donate a suffix.
const MIN_DONOR_LEN: usize = 3;

/// Generates `input.count()` unique strings with controllable overlap.
///
/// # Behavior
/// - Seeds the set with one fully random string.
/// - For each candidate, with probability `overlap_prob` (and only when the
///   previously accepted string has at least 3 symbols) the candidate starts
///   with the last 2..=min(5, len - 1) symbols of that string, followed by a
///   random tail so the total aims for a length drawn from `[min_len, max_len]`.
/// - Otherwise the candidate is fully random.
/// - A candidate is accepted when it is new and at least `min_len` long; it
///   then becomes the donor for the next overlap.
///
/// # Returns
/// The accepted strings, sorted ascending.
///
/// # Errors
/// - `Infeasible` when the length bounds cannot hold `count` distinct strings.
/// - `AttemptsExhausted` after `max_attempts` consecutive rejections.
pub fn generate_overlapping<R: Rng + ?Sized>(rng: &mut R, input: &GenerationInput) -> GenResult<Vec<String>> {
	Ok(accept_strings(rng, input, |_| {})?.into_sorted())
}

/// Runs the acceptance loop, calling `on_accept` with each new string in
/// acceptance order (the first seed included).
fn accept_strings<R, F>(rng: &mut R, input: &GenerationInput, mut on_accept: F) -> GenResult<StringSet>
where
	R: Rng + ?Sized,
	F: FnMut(&str),
{
	let requested = input.count();
	let available = capacity(input.min_len(), input.max_len());
	if requested > available {
		return Err(GenError::Infeasible { requested, capacity: available });
	}

	let max_attempts = input.max_attempts.max(1);
	let mut strings = StringSet::new();

	let first_len = rng.random_range(input.min_len()..=input.max_len());
	let mut current = random_string(rng, first_len);
	on_accept(&current);
	strings.insert(current.clone());

	let mut rejected = 0usize;
	let mut total_rejected = 0usize;
	while strings.len() < requested {
		let candidate = next_candidate(rng, input, &current);

		if candidate.len() >= input.min_len() && !strings.contains(&candidate) {
			on_accept(&candidate);
			strings.insert(candidate.clone());
			current = candidate;
			rejected = 0;
			continue;
		}

		rejected += 1;
		total_rejected += 1;
		if rejected >= max_attempts {
			return Err(GenError::AttemptsExhausted {
				accepted: strings.len(),
				requested,
				attempts: rejected,
			});
		}
	}

	log::debug!("generated {} strings ({} candidates rejected)", requested, total_rejected);
	Ok(strings)
}

/// Draws one candidate, overlapping `previous` when the coin flip allows it.
fn next_candidate<R: Rng + ?Sized>(rng: &mut R, input: &GenerationInput, previous: &str) -> String {
	if rng.random::<f64>() < input.overlap_prob() && previous.len() >= MIN_DONOR_LEN {
		let overlap_size = rng.random_range(MIN_OVERLAP..=min(MAX_OVERLAP, previous.len() - 1));
		let mut candidate = previous[previous.len() - overlap_size..].to_owned();
		let new_len = rng.random_range(input.min_len()..=input.max_len());
		push_random(rng, &mut candidate, new_len.saturating_sub(overlap_size));
		candidate
	} else {
		let new_len = rng.random_range(input.min_len()..=input.max_len());
		random_string(rng, new_len)
	}
}
