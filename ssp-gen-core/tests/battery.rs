use std::fs;

use ssp_gen_core::io::read_input_file;
use ssp_gen_core::{Battery, FixtureCatalog, FixtureSpec, GenError, Progress};

fn small_catalog() -> FixtureCatalog {
	FixtureCatalog::new(vec![
		FixtureSpec::Fixed {
			name: "tiny.txt".to_owned(),
			strings: ["ABC", "BCD", "CDE", "DEF"].into_iter().map(str::to_owned).collect(),
		},
		FixtureSpec::Overlapping {
			name: "a.txt".to_owned(),
			count: 60,
			min_len: 4,
			max_len: 9,
			overlap_prob: 0.7,
		},
		FixtureSpec::Overlapping {
			name: "b.txt".to_owned(),
			count: 40,
			min_len: 6,
			max_len: 6,
			overlap_prob: 0.3,
		},
		FixtureSpec::Permutations { name: "perm.txt".to_owned(), base: "ABCD".to_owned() },
	])
	.unwrap()
}

#[test]
fn standard_battery_writes_six_valid_files() {
	let dir = tempfile::tempdir().unwrap();
	let reports = Battery::new(42).run(&FixtureCatalog::standard(), dir.path()).unwrap();

	let counts: Vec<(&str, usize)> = reports.iter().map(|r| (r.name.as_str(), r.count)).collect();
	assert_eq!(
		counts,
		vec![
			("input_tiny.txt", 4),
			("input_small.txt", 100),
			("input_medium.txt", 500),
			("input_large.txt", 1000),
			("input_xlarge.txt", 2000),
			("input_perm720.txt", 720),
		]
	);

	let bounds = [
		("input_small.txt", 5, 10),
		("input_medium.txt", 6, 12),
		("input_large.txt", 7, 15),
		("input_xlarge.txt", 8, 15),
		("input_perm720.txt", 6, 6),
	];
	for (name, min_len, max_len) in bounds {
		let file = read_input_file(dir.path().join(name)).unwrap();
		file.validate().unwrap();
		let (shortest, longest) = file.length_range().unwrap();
		assert!(shortest >= min_len && longest <= max_len, "{} out of bounds", name);
	}

	let tiny = fs::read_to_string(dir.path().join("input_tiny.txt")).unwrap();
	assert_eq!(tiny, "4\nABC\nBCD\nCDE\nDEF\n");
}

#[test]
fn same_seed_is_byte_identical() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	let catalog = small_catalog();

	Battery::new(7).run(&catalog, first.path()).unwrap();
	Battery::new(7).run(&catalog, second.path()).unwrap();

	for fixture in catalog.fixtures() {
		let a = fs::read(first.path().join(fixture.name())).unwrap();
		let b = fs::read(second.path().join(fixture.name())).unwrap();
		assert_eq!(a, b, "{} differs between runs", fixture.name());
	}
}

#[test]
fn different_seed_changes_overlapping_fixtures() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	let catalog = small_catalog();

	Battery::new(1).run(&catalog, first.path()).unwrap();
	Battery::new(2).run(&catalog, second.path()).unwrap();

	let read = |dir: &tempfile::TempDir, name: &str| fs::read(dir.path().join(name)).unwrap();
	assert_ne!(read(&first, "a.txt"), read(&second, "a.txt"));
	assert_eq!(read(&first, "perm.txt"), read(&second, "perm.txt"));
	assert_eq!(read(&first, "tiny.txt"), read(&second, "tiny.txt"));
}

#[test]
fn generator_state_carries_across_fixtures() {
	// Dropping the first overlapping fixture shifts the random stream seen by the next one.
	let full = tempfile::tempdir().unwrap();
	let partial = tempfile::tempdir().unwrap();
	let catalog = small_catalog();
	let tail = FixtureCatalog::new(catalog.fixtures()[2..].to_vec()).unwrap();

	Battery::new(3).run(&catalog, full.path()).unwrap();
	Battery::new(3).run(&tail, partial.path()).unwrap();

	assert_ne!(
		fs::read(full.path().join("b.txt")).unwrap(),
		fs::read(partial.path().join("b.txt")).unwrap()
	);
}

#[test]
fn progress_announces_each_fixture_before_writing_it() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = small_catalog();
	let mut events = Vec::new();

	Battery::new(42)
		.run_with(&catalog, dir.path(), |progress| match progress {
			Progress::Started { index, fixture } => {
				assert!(!dir.path().join(fixture.name()).exists());
				events.push(format!("start {}", index));
			}
			Progress::Written { index, report } => {
				assert!(report.path.is_file());
				assert_eq!(report.name, catalog.fixtures()[index].name());
				events.push(format!("written {}", index));
			}
		})
		.unwrap();

	assert_eq!(
		events,
		vec!["start 0", "written 0", "start 1", "written 1", "start 2", "written 2", "start 3", "written 3"]
	);
}

#[test]
fn creates_missing_output_folder() {
	let dir = tempfile::tempdir().unwrap();
	let nested = dir.path().join("fixtures").join("ssp");
	Battery::new(42).run(&small_catalog(), &nested).unwrap();
	assert!(nested.join("perm.txt").is_file());
}

#[test]
fn infeasible_fixture_stops_the_run() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = FixtureCatalog::new(vec![
		FixtureSpec::Permutations { name: "ok.txt".to_owned(), base: "AB".to_owned() },
		FixtureSpec::Overlapping {
			name: "too_many.txt".to_owned(),
			count: 700,
			min_len: 2,
			max_len: 2,
			overlap_prob: 0.5,
		},
		FixtureSpec::Permutations { name: "never.txt".to_owned(), base: "CD".to_owned() },
	])
	.unwrap();

	let err = Battery::new(42).run(&catalog, dir.path()).unwrap_err();
	assert!(matches!(err, GenError::Infeasible { requested: 700, capacity: 676 }));
	assert!(dir.path().join("ok.txt").is_file());
	assert!(!dir.path().join("too_many.txt").exists());
	assert!(!dir.path().join("never.txt").exists());
}

#[test]
fn tight_attempt_budget_fails_cleanly() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = FixtureCatalog::new(vec![FixtureSpec::Overlapping {
		name: "crowded.txt".to_owned(),
		count: 26,
		min_len: 1,
		max_len: 1,
		overlap_prob: 0.0,
	}])
	.unwrap();

	let err = Battery::new(42).max_attempts(1).run(&catalog, dir.path()).unwrap_err();
	assert!(matches!(err, GenError::AttemptsExhausted { requested: 26, .. }));
	assert!(err.to_string().starts_with("infeasible parameters"));
}
