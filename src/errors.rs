use std::{io, path::PathBuf};

/// Everything that can abort a conversion run. A failure is terminal: the
/// run stops at the first error and the pending outputs are discarded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("cannot read `{}`: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot write `{}`: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("`{}` line {line}, field {field}: `{value}` is not a decimal integer", path.display())]
  Parse {
    path: PathBuf,
    /// 1-based line number in the source file.
    line: usize,
    /// 1-based field index within the line.
    field: usize,
    value: String,
  },

  #[error("a test case takes 2 to 4 files (the last one is the expected output), got {0}")]
  TestCaseArity(usize),

  #[error("row width must be at least 1, got {0}")]
  InvalidColumns(usize),

  #[error("layout `{mode}` takes {expected} files per test case, got {got}")]
  ModeArity {
    mode: &'static str,
    expected: &'static str,
    got: usize,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
