use crate::error::{GenError, GenResult};

/// In-memory form of a solver input file.
///
/// On disk the format is a decimal record count on the first line, followed
/// by one string per line, every line newline-terminated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFile {
	strings: Vec<String>,
}

impl InputFile {
	/// Wraps records in the order they will be written.
	pub fn new(strings: Vec<String>) -> Self {
		Self { strings }
	}

	pub fn len(&self) -> usize {
		self.strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}

	pub fn into_strings(self) -> Vec<String> {
		self.strings
	}

	/// Renders the exact on-disk text.
	pub fn render(&self) -> String {
		let size = self.strings.iter().map(|s| s.len() + 1).sum::<usize>() + 21;
		let mut out = String::with_capacity(size);
		out.push_str(&self.strings.len().to_string());
		out.push('\n');
		for s in &self.strings {
			out.push_str(s);
			out.push('\n');
		}
		out
	}

	/// Parses the on-disk text.
	///
	/// Accepts `\n` and `\r\n` line endings.
	///
	/// # Errors
	/// `MalformedInputFile` if the count line is missing or not a decimal
	/// integer, or if it disagrees with the number of records.
	pub fn parse(text: &str) -> GenResult<Self> {
		let mut lines = text.lines();
		let header = lines.next().ok_or_else(|| GenError::MalformedInputFile {
			line: 1,
			reason: "missing count line".to_owned(),
		})?;
		let expected: usize = header.trim().parse().map_err(|_| GenError::MalformedInputFile {
			line: 1,
			reason: format!("count line {:?} is not a decimal integer", header),
		})?;

		let strings: Vec<String> = lines.map(str::to_owned).collect();
		if strings.len() != expected {
			return Err(GenError::MalformedInputFile {
				line: strings.len() + 1,
				reason: format!("count line announces {} strings, found {}", expected, strings.len()),
			});
		}

		Ok(Self { strings })
	}

	/// Checks that records are in strictly ascending order, hence unique.
	///
	/// # Errors
	/// `MalformedInputFile` pointing at the first offending record.
	pub fn validate(&self) -> GenResult<()> {
		for (i, pair) in self.strings.windows(2).enumerate() {
			if pair[0] >= pair[1] {
				let reason = if pair[0] == pair[1] {
					format!("duplicate string {:?}", pair[1])
				} else {
					format!("{:?} sorts before {:?}", pair[1], pair[0])
				};
				// Line 1 is the count, first record is line 2
				return Err(GenError::MalformedInputFile { line: i + 3, reason });
			}
		}
		Ok(())
	}

	/// Shortest and longest record lengths, `None` when empty.
	pub fn length_range(&self) -> Option<(usize, usize)> {
		let min = self.strings.iter().map(String::len).min()?;
		let max = self.strings.iter().map(String::len).max()?;
		Some((min, max))
	}
}
