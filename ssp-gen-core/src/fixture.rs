use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::io::{ensure_folder, write_input_file};
use crate::model::generation_input::{DEFAULT_MAX_ATTEMPTS, GenerationInput};
use crate::model::overlap::generate_overlapping;
use crate::model::permutation::generate_permutations;

/// Seed used when none is given, so repeated runs produce identical files.
pub const DEFAULT_SEED: u64 = 42;

/// One file of the battery and how its strings are obtained.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureSpec {
	/// A hand-written list, written in the given order.
	Fixed { name: String, strings: Vec<String> },

	/// Strings from the overlapping generator.
	Overlapping {
		name: String,
		count: usize,
		min_len: usize,
		max_len: usize,
		overlap_prob: f64,
	},

	/// Every distinct permutation of `base`.
	Permutations { name: String, base: String },
}

impl FixtureSpec {
	/// File name of this fixture, relative to the output folder.
	pub fn name(&self) -> &str {
		match self {
			FixtureSpec::Fixed { name, .. }
			| FixtureSpec::Overlapping { name, .. }
			| FixtureSpec::Permutations { name, .. } => name,
		}
	}

	/// Produces the strings of this fixture, advancing `rng` only for
	/// overlapping fixtures.
	pub fn generate<R: rand::Rng + ?Sized>(&self, rng: &mut R, max_attempts: usize) -> GenResult<Vec<String>> {
		match self {
			FixtureSpec::Fixed { strings, .. } => Ok(strings.clone()),
			FixtureSpec::Overlapping { count, min_len, max_len, overlap_prob, .. } => {
				let input = GenerationInput::new(*count, *min_len, *max_len, *overlap_prob)?
					.with_max_attempts(max_attempts);
				generate_overlapping(rng, &input)
			}
			FixtureSpec::Permutations { base, .. } => generate_permutations(base),
		}
	}
}

impl fmt::Display for FixtureSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FixtureSpec::Fixed { name, strings } => write!(f, "{} (fixed, {} strings)", name, strings.len()),
			FixtureSpec::Overlapping { name, count, min_len, max_len, overlap_prob } => write!(
				f,
				"{} ({} strings, length {}..={}, overlap {})",
				name, count, min_len, max_len, overlap_prob
			),
			FixtureSpec::Permutations { name, base } => write!(f, "{} (permutations of {:?})", name, base),
		}
	}
}

/// Ordered list of fixtures generated in one run.
///
/// The order matters: all fixtures share one random generator, so moving or
/// inserting an entry changes every overlapping fixture after it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct FixtureCatalog {
	fixtures: Vec<FixtureSpec>,
}

impl FixtureCatalog {
	/// Builds a catalog, rejecting duplicate file names.
	pub fn new(fixtures: Vec<FixtureSpec>) -> GenResult<Self> {
		let mut seen = HashSet::new();
		for fixture in &fixtures {
			if !seen.insert(fixture.name()) {
				return Err(GenError::Catalog(format!("duplicate fixture name {:?}", fixture.name())));
			}
		}
		Ok(Self { fixtures })
	}

	/// The six-file battery: tiny, small, medium, large, xlarge, perm720.
	pub fn standard() -> Self {
		let overlapping = |name: &str, count, min_len, max_len, overlap_prob| FixtureSpec::Overlapping {
			name: name.to_owned(),
			count,
			min_len,
			max_len,
			overlap_prob,
		};

		Self {
			fixtures: vec![
				FixtureSpec::Fixed {
					name: "input_tiny.txt".to_owned(),
					strings: ["ABC", "BCD", "CDE", "DEF"].into_iter().map(str::to_owned).collect(),
				},
				overlapping("input_small.txt", 100, 5, 10, 0.6),
				overlapping("input_medium.txt", 500, 6, 12, 0.7),
				overlapping("input_large.txt", 1000, 7, 15, 0.7),
				overlapping("input_xlarge.txt", 2000, 8, 15, 0.8),
				FixtureSpec::Permutations {
					name: "input_perm720.txt".to_owned(),
					base: "ABCDEF".to_owned(),
				},
			],
		}
	}

	/// Parses a catalog from a JSON array of fixtures.
	pub fn from_json(json: &str) -> GenResult<Self> {
		let fixtures: Vec<FixtureSpec> = serde_json::from_str(json).map_err(|e| GenError::Catalog(e.to_string()))?;
		Self::new(fixtures)
	}

	/// Loads a JSON catalog from disk.
	pub fn load<P: AsRef<Path>>(path: P) -> GenResult<Self> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
		Self::from_json(&json)
	}

	pub fn to_json(&self) -> GenResult<String> {
		serde_json::to_string_pretty(self).map_err(|e| GenError::Catalog(e.to_string()))
	}

	pub fn fixtures(&self) -> &[FixtureSpec] {
		&self.fixtures
	}

	pub fn len(&self) -> usize {
		self.fixtures.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fixtures.is_empty()
	}
}

impl Default for FixtureCatalog {
	fn default() -> Self {
		Self::standard()
	}
}

/// Outcome of one written fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureReport {
	pub name: String,
	pub path: PathBuf,
	pub count: usize,
}

/// Progress notifications emitted by `Battery::run_with`.
#[derive(Clone, Copy, Debug)]
pub enum Progress<'a> {
	/// About to generate the fixture at `index`.
	Started { index: usize, fixture: &'a FixtureSpec },
	/// The fixture at `index` has been written.
	Written { index: usize, report: &'a FixtureReport },
}

/// Runs a catalog with a single seeded generator.
///
/// # Responsibilities
/// - Own the only random generator of the run
/// - Generate and write fixtures sequentially, in catalog order
/// - Stop at the first failure
#[derive(Debug)]
pub struct Battery {
	rng: ChaCha8Rng,
	max_attempts: usize,
}

impl Battery {
	/// Creates a battery whose generator is seeded with `seed`.
	pub fn new(seed: u64) -> Self {
		Self {
			rng: ChaCha8Rng::seed_from_u64(seed),
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}

	/// Overrides the consecutive-rejection budget of overlapping fixtures.
	pub fn max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}

	/// Generates one fixture and writes it under `folder`.
	pub fn run_one<P: AsRef<Path>>(&mut self, fixture: &FixtureSpec, folder: P) -> GenResult<FixtureReport> {
		log::debug!("generating {}", fixture);
		let strings = fixture.generate(&mut self.rng, self.max_attempts)?;
		let path = folder.as_ref().join(fixture.name());
		let count = write_input_file(&path, &strings)?;
		Ok(FixtureReport { name: fixture.name().to_owned(), path, count })
	}

	/// Generates every fixture of `catalog` into `folder`, creating it if needed.
	///
	/// `on_progress` sees `Started` before a fixture is generated and
	/// `Written` once its file is on disk.
	pub fn run_with<P, F>(&mut self, catalog: &FixtureCatalog, folder: P, mut on_progress: F) -> GenResult<Vec<FixtureReport>>
	where
		P: AsRef<Path>,
		F: FnMut(Progress<'_>),
	{
		let folder = folder.as_ref();
		ensure_folder(folder)?;

		let mut reports = Vec::with_capacity(catalog.len());
		for (index, fixture) in catalog.fixtures().iter().enumerate() {
			on_progress(Progress::Started { index, fixture });
			let report = self.run_one(fixture, folder).inspect_err(|e| {
				log::warn!("fixture {} failed: {}", fixture.name(), e);
			})?;
			on_progress(Progress::Written { index, report: &report });
			reports.push(report);
		}
		Ok(reports)
	}

	/// Same as `run_with`, without a progress callback.
	pub fn run<P: AsRef<Path>>(&mut self, catalog: &FixtureCatalog, folder: P) -> GenResult<Vec<FixtureReport>> {
		self.run_with(catalog, folder, |_| {})
	}
}
