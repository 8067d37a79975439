use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult};
use crate::model::input_file::InputFile;

/// Writes `strings` to `path` as a solver input file.
///
/// - Creates the file, truncating any previous content
/// - Writes the count line then one string per line, in the order given
///
/// Returns the number of strings written.
pub fn write_input_file<P: AsRef<Path>>(path: P, strings: &[String]) -> GenResult<usize> {
	let path = path.as_ref();
	let file = File::create(path).map_err(|e| GenError::io(path, e))?;
	let mut writer = BufWriter::new(file);

	writeln!(writer, "{}", strings.len()).map_err(|e| GenError::io(path, e))?;
	for s in strings {
		writeln!(writer, "{}", s).map_err(|e| GenError::io(path, e))?;
	}
	writer.flush().map_err(|e| GenError::io(path, e))?;

	log::debug!("wrote {} ({} strings)", path.display(), strings.len());
	Ok(strings.len())
}

/// Reads and parses a solver input file.
///
/// Only the format is checked here, see `InputFile::validate` for ordering.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> GenResult<InputFile> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
	InputFile::parse(&contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Makes sure `folder` exists, creating missing parents.
pub(crate) fn ensure_folder(folder: &Path) -> GenResult<()> {
	if folder.is_dir() {
		return Ok(());
	}
	fs::create_dir_all(folder).map_err(|e| GenError::io(folder, e))
}
