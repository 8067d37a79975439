use rand::Rng;

/// Symbol universe of every generated string: the 26 uppercase ASCII letters.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws a single symbol uniformly from the alphabet.
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
	ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// Appends `len` uniformly random symbols to `out`.
pub fn push_random<R: Rng + ?Sized>(rng: &mut R, out: &mut String, len: usize) {
	out.reserve(len);
	for _ in 0..len {
		out.push(random_symbol(rng));
	}
}

/// Builds a fully random string of exactly `len` symbols.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
	let mut s = String::with_capacity(len);
	push_random(rng, &mut s, len);
	s
}

/// Number of distinct strings whose length lies in `[min_len, max_len]`.
///
/// Saturates at `usize::MAX`, which is plenty for deciding feasibility.
pub fn capacity(min_len: usize, max_len: usize) -> usize {
	let base = ALPHABET.len();
	let mut total: usize = 0;
	for len in min_len..=max_len {
		let count = u32::try_from(len)
			.ok()
			.and_then(|exp| base.checked_pow(exp))
			.unwrap_or(usize::MAX);
		total = total.saturating_add(count);
		if total == usize::MAX {
			break;
		}
	}
	total
}
