//! String generation for shortest-superstring solver inputs.
//!
//! This module groups:
//! - The symbol alphabet and random string helpers (`alphabet`)
//! - The unique string accumulator (`StringSet`)
//! - Generation parameters (`GenerationInput`)
//! - The overlapping string generator and the permutation generator
//! - The in-memory input file model (`InputFile`)

/// Fixed 26-letter alphabet and uniform random string helpers.
pub mod alphabet;

/// Validated parameters and retry budget for overlapping generation.
pub mod generation_input;

/// Count-then-records file model with rendering, parsing and validation.
pub mod input_file;

/// Seeded generator of unique strings with controllable suffix/prefix overlap.
pub mod overlap;

/// Exhaustive, deduplicated permutations of a base string.
pub mod permutation;

/// Ordered set of unique strings used as the generation accumulator.
pub mod string_set;
