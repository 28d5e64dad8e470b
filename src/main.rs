use std::path::PathBuf;

use clap::Parser;
use vec2mem::{convert, Config, HexStyle, LayoutMode, TestCase};

/// Converts decimal test-vector files into hex fixtures for HDL test benches.
#[derive(Debug, clap::Parser)]
#[command(name = "vec2mem", version)]
struct Args {
  /// Layout produced by this run
  #[arg(long, value_enum, default_value = "flat")]
  mode: LayoutMode,

  /// Hex rendering of each value
  #[arg(long, value_enum, default_value = "padded4")]
  hex_style: HexStyle,

  /// Row width for the row-wrapped layouts
  #[arg(long, default_value_t = vec2mem::config::NUM_COLUMNS)]
  columns: usize,

  /// Reproduce the historical writer byte-for-byte, counter quirks included
  #[arg(long)]
  legacy_parity: bool,

  /// Directory the output files are written to
  #[arg(long, default_value = ".")]
  out_dir: PathBuf,

  /// Override the input-vector output filename
  #[arg(long)]
  input_name: Option<String>,

  /// Override the expected output filename
  #[arg(long)]
  expected_name: Option<String>,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Source files, order-significant; the last one is the expected output
  #[arg(value_parser, required = true, num_args = 2..=4)]
  path: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();

  let mut env = env_logger::Env::default();
  if args.verbose {
    env = env.default_filter_or("debug");
  }
  env_logger::Builder::from_env(env).init();

  let test_case = TestCase::new(args.path)?;
  let config = Config {
    mode: args.mode,
    hex_style: args.hex_style,
    num_columns: args.columns,
    legacy_parity: args.legacy_parity,
    out_dir: args.out_dir,
    input_fname: args.input_name,
    expected_fname: args.expected_name,
  };

  convert(&config, &[test_case])?;
  Ok(())
}
