use std::{
  fs,
  io::{self, BufWriter, Write},
  path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
  config::{Config, LayoutMode},
  errors::{Error, Result},
  layout::{write_flat, RowWriter},
  vector::{read_rows, TestCase},
};

/// An output file under construction. Content accumulates in a temporary
/// file next to the final path and is persisted over it only when the whole
/// run succeeds, so a failed run never leaves a half-written file behind.
struct Output {
  path: PathBuf,
  file: BufWriter<NamedTempFile>,
}

impl Output {
  fn create(dir: &Path, path: PathBuf) -> Result<Self> {
    let tmp = NamedTempFile::new_in(dir).map_err(|source| Error::Write {
      path: path.clone(),
      source,
    })?;
    Ok(Output {
      path,
      file: BufWriter::new(tmp),
    })
  }

  fn wrap(&self, res: io::Result<()>) -> Result<()> {
    res.map_err(|source| Error::Write {
      path: self.path.clone(),
      source,
    })
  }

  fn persist(self) -> Result<()> {
    let path = self.path;
    let tmp = self
      .file
      .into_inner()
      .map_err(|e| Error::Write {
        path: path.clone(),
        source: e.into(),
      })?;
    tmp.persist(&path).map_err(|e| Error::Write {
      path: path.clone(),
      source: e.error,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
  }
}

fn check_arity(mode: LayoutMode, test_case: &TestCase) -> Result<()> {
  let got = test_case.len();
  let (ok, expected) = match mode {
    LayoutMode::Flat | LayoutMode::RowWrappedExpected => ((2..=4).contains(&got), "2 to 4"),
    LayoutMode::RowWrappedInput => (got == 3, "exactly 3"),
    LayoutMode::ConcatenatedThreeSource => (got == 4, "exactly 4"),
  };
  if ok {
    Ok(())
  } else {
    Err(Error::ModeArity {
      mode: mode.as_str(),
      expected,
      got,
    })
  }
}

/// Converts every test case in order, writing the input-vector file and the
/// expected file configured by `config`. All tokens of one test case are
/// appended before the next test case begins.
pub fn convert(config: &Config, test_cases: &[TestCase]) -> Result<()> {
  if !config.mode.is_flat() && config.num_columns == 0 {
    return Err(Error::InvalidColumns(config.num_columns));
  }

  fs::create_dir_all(&config.out_dir).map_err(|source| Error::Write {
    path: config.out_dir.clone(),
    source,
  })?;

  let mut input_out = Output::create(&config.out_dir, config.input_path())?;
  let mut expected_out = Output::create(&config.out_dir, config.expected_path())?;

  for test_case in test_cases {
    check_arity(config.mode, test_case)?;
    if config.mode.is_flat() {
      convert_flat_case(config, test_case, &mut input_out, &mut expected_out)?;
    } else {
      convert_wrapped_case(config, test_case, &mut input_out, &mut expected_out)?;
    }
  }

  input_out.persist()?;
  expected_out.persist()?;
  log::info!(
    "converted {} test case(s) into {} and {}",
    test_cases.len(),
    config.input_path().display(),
    config.expected_path().display()
  );
  Ok(())
}

fn convert_flat_case(
  config: &Config,
  test_case: &TestCase,
  input_out: &mut Output,
  expected_out: &mut Output,
) -> Result<()> {
  // The header reads as a comment to `$readmemh`-style loaders.
  let res = writeln!(input_out.file, "//input vector");
  input_out.wrap(res)?;

  for source in test_case.sources() {
    let rows = read_rows(source)?;
    let res = write_flat(&mut input_out.file, &rows, config.hex_style);
    input_out.wrap(res)?;
  }

  let rows = read_rows(test_case.expected())?;
  let res = write_flat(&mut expected_out.file, &rows, config.hex_style);
  expected_out.wrap(res)
}

fn convert_wrapped_case(
  config: &Config,
  test_case: &TestCase,
  input_out: &mut Output,
  expected_out: &mut Output,
) -> Result<()> {
  let legacy = config.legacy_parity && config.mode == LayoutMode::RowWrappedInput;

  if legacy {
    // The per-source (and for the first source, per-line) counter resets are
    // part of the historical layout and only live here.
    for (index, source) in test_case.sources().iter().enumerate() {
      let rows = read_rows(source)?;
      let mut writer = RowWriter::new(config.num_columns);
      let res = if index == 0 {
        rows.iter().try_for_each(|row| {
          writer.reset();
          row
            .iter()
            .try_for_each(|&v| writer.emit_legacy_first(&mut input_out.file, v, config.hex_style))
        })
      } else {
        rows.iter().flatten().try_for_each(|&v| {
          writer.emit_legacy_second(&mut input_out.file, v, config.hex_style)
        })
      };
      input_out.wrap(res)?;
    }
  } else {
    // One counter spans all sources of the test case, so a source whose
    // token count is not a row multiple cannot widen the next source's row.
    let mut writer = RowWriter::new(config.num_columns);
    for source in test_case.sources() {
      let rows = read_rows(source)?;
      let res = rows
        .iter()
        .flatten()
        .try_for_each(|&v| writer.emit(&mut input_out.file, v, config.hex_style));
      input_out.wrap(res)?;
    }
  }

  let rows = read_rows(test_case.expected())?;
  let mut writer = RowWriter::new(config.num_columns);
  let res = if legacy {
    rows.iter().flatten().try_for_each(|&v| {
      writer.emit_legacy_expected(&mut expected_out.file, v, config.hex_style)
    })
  } else {
    rows
      .iter()
      .flatten()
      .try_for_each(|&v| writer.emit(&mut expected_out.file, v, config.hex_style))
  };
  expected_out.wrap(res)
}
