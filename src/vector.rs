use std::{
  fs,
  path::{Path, PathBuf},
};

use crate::errors::{Error, Result};

/// One conversion unit: an ordered list of 2 to 4 file paths. All but the
/// last path are input-vector sources; the last is the expected-output
/// source.
#[derive(Clone, Debug)]
pub struct TestCase {
  paths: Vec<PathBuf>,
}

impl TestCase {
  pub fn new(paths: Vec<PathBuf>) -> Result<Self> {
    if !(2..=4).contains(&paths.len()) {
      return Err(Error::TestCaseArity(paths.len()));
    }
    Ok(TestCase { paths })
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  /// The input-vector source paths, in order.
  pub fn sources(&self) -> &[PathBuf] {
    &self.paths[..self.paths.len() - 1]
  }

  /// The expected-output source path.
  pub fn expected(&self) -> &Path {
    &self.paths[self.paths.len() - 1]
  }
}

/// Reads one vector source file into rows of decimal values, preserving the
/// line structure (the legacy row writer wraps per input line). Fields are
/// comma-separated; blank lines carry no values and are skipped.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<i64>>> {
  let text = fs::read_to_string(path).map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let mut rows = Vec::new();
  for (lineno, line) in text.lines().enumerate() {
    let line = line.trim_end();
    if line.is_empty() {
      continue;
    }
    let mut row = Vec::new();
    for (fieldno, field) in line.split(',').enumerate() {
      let field = field.trim();
      let value = field.parse::<i64>().map_err(|_| Error::Parse {
        path: path.to_path_buf(),
        line: lineno + 1,
        field: fieldno + 1,
        value: field.to_string(),
      })?;
      row.push(value);
    }
    rows.push(row);
  }

  log::debug!("{}: {} rows", path.display(), rows.len());
  Ok(rows)
}
