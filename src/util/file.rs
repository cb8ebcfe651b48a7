//! Whole-file reading helpers.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{UtilError, UtilResult};

/// Read a UTF-8 file into a single string.
///
/// # Errors
///
/// Returns `UtilError::File` if the file cannot be opened or is not UTF-8.
pub fn read_content(path: impl AsRef<Path>) -> UtilResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| file_error(path, source))
}

/// Read a UTF-8 file line by line. Line terminators (`\n` or `\r\n`) are
/// stripped and a trailing newline does not produce an empty last line.
///
/// # Errors
///
/// Returns `UtilError::File` if the file cannot be opened or a line is not
/// UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> UtilResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| file_error(path, source))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<_, _>>()
        .map_err(|source| file_error(path, source))
}

fn file_error(path: &Path, source: std::io::Error) -> UtilError {
    UtilError::File {
        path: path.to_path_buf(),
        source,
    }
}
