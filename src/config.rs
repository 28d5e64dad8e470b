use std::path::PathBuf;

use crate::format::HexStyle;

/// Default row width for the row-wrapped layouts.
pub const NUM_COLUMNS: usize = 8;

/// Which output layout a run produces. Exactly one mode is active per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LayoutMode {
  /// One hex token per line, with a `//input vector` comment line opening
  /// each test case in the input-vector file.
  Flat,
  /// The historical stream layout: input-vector rows keep the
  /// source-dependent trailing-comma asymmetry under `legacy_parity`,
  /// expected rows terminate with `,\n`.
  RowWrappedInput,
  /// Symmetric row wrap: both outputs use expected-style rows.
  RowWrappedExpected,
  /// Flat layout with three input-vector sources per test case.
  ConcatenatedThreeSource,
}

impl LayoutMode {
  pub fn is_flat(&self) -> bool {
    matches!(self, LayoutMode::Flat | LayoutMode::ConcatenatedThreeSource)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      LayoutMode::Flat => "flat",
      LayoutMode::RowWrappedInput => "row-wrapped-input",
      LayoutMode::RowWrappedExpected => "row-wrapped-expected",
      LayoutMode::ConcatenatedThreeSource => "concatenated-three-source",
    }
  }

  fn default_input_fname(&self) -> &'static str {
    if self.is_flat() {
      "test_input.mem"
    } else {
      "converted_test_input.txt"
    }
  }

  fn default_expected_fname(&self) -> &'static str {
    if self.is_flat() {
      "test_result_expected.mem"
    } else {
      "converted_test_result.txt"
    }
  }
}

pub struct Config {
  /// The layout this run produces.
  pub mode: LayoutMode,
  /// How each value is rendered as a hex token.
  pub hex_style: HexStyle,
  /// Row width for the row-wrapped layouts.
  pub num_columns: usize,
  /// If true, reproduce the historical writer byte-for-byte, counter quirks
  /// included. The clean layouts are the default.
  pub legacy_parity: bool,
  /// The directory the output files are written to.
  pub out_dir: PathBuf,
  /// Overrides the mode-dependent input-vector output filename.
  pub input_fname: Option<String>,
  /// Overrides the mode-dependent expected output filename.
  pub expected_fname: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      mode: LayoutMode::Flat,
      hex_style: HexStyle::Padded4,
      num_columns: NUM_COLUMNS,
      legacy_parity: false,
      out_dir: PathBuf::from("."),
      input_fname: None,
      expected_fname: None,
    }
  }
}

impl Config {
  /// The full path of the input-vector output file.
  pub fn input_path(&self) -> PathBuf {
    let fname = self.input_fname.as_deref().unwrap_or(self.mode.default_input_fname());
    self.out_dir.join(fname)
  }

  /// The full path of the expected output file.
  pub fn expected_path(&self) -> PathBuf {
    let fname = self.expected_fname.as_deref().unwrap_or(self.mode.default_expected_fname());
    self.out_dir.join(fname)
  }
}
