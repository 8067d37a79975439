//! Synthetic input generation for shortest-superstring solvers.
//!
//! This crate provides:
//! - A seeded generator of unique uppercase strings with tunable overlap
//! - Exhaustive permutation inputs for small, combinatorially complete cases
//! - The count-then-records input file format (write, read, validate)
//! - A catalog of named fixtures generated in one reproducible run
//!
//! All randomness flows through an explicit generator passed by the caller;
//! nothing here touches a process-wide random source.

/// String models and generation logic.
pub mod model;

/// Fixture catalog and the battery runner that writes it to disk.
pub mod fixture;

/// Input file I/O (write, read, folder helpers).
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{GenError, GenResult};
pub use fixture::{Battery, DEFAULT_SEED, FixtureCatalog, FixtureReport, FixtureSpec, Progress};
