use std::io::{self, Write};

use crate::format::{hex_token, HexStyle};

/// Writes rows of values one hex token per line.
pub fn write_flat<W: Write>(out: &mut W, rows: &[Vec<i64>], style: HexStyle) -> io::Result<()> {
  for row in rows {
    for &value in row {
      writeln!(out, "{}", hex_token(value, style))?;
    }
  }
  Ok(())
}

/// Emits comma-joined rows of a fixed column width. One writer per output
/// stream and source; the caller decides when a counter starts fresh.
///
/// The counter is signed because the legacy expected-stream wrap subtracts 8
/// at the row boundary regardless of the configured width, which drives the
/// counter negative for widths below 8. That arithmetic only wraps correctly
/// when the width is 8; it is kept verbatim behind the legacy entry points.
pub struct RowWriter {
  columns: isize,
  counter: isize,
}

impl RowWriter {
  pub fn new(columns: usize) -> Self {
    assert!(columns > 0);
    RowWriter {
      columns: columns as isize,
      counter: 0,
    }
  }

  pub fn reset(&mut self) {
    self.counter = 0;
  }

  /// Clean wrap: every token is comma-terminated and every `columns`-th
  /// token closes its row with a newline.
  pub fn emit<W: Write>(&mut self, out: &mut W, value: i64, style: HexStyle) -> io::Result<()> {
    let token = hex_token(value, style);
    if self.counter == self.columns - 1 {
      writeln!(out, "{},", token)?;
      self.counter = 0;
    } else {
      write!(out, "{},", token)?;
      self.counter += 1;
    }
    Ok(())
  }

  /// Legacy wrap for the first input-vector source. The boundary token
  /// closes the row but never advances the counter, so a line longer than
  /// the configured width emits a row break after every token past the
  /// boundary. The caller resets the counter per input line.
  pub fn emit_legacy_first<W: Write>(
    &mut self,
    out: &mut W,
    value: i64,
    style: HexStyle,
  ) -> io::Result<()> {
    let token = hex_token(value, style);
    if self.counter != self.columns - 1 {
      write!(out, "{},", token)?;
      self.counter += 1;
    } else {
      writeln!(out, "{},", token)?;
    }
    Ok(())
  }

  /// Legacy wrap for the second input-vector source. The boundary token is
  /// written bare, with no separator and no newline, and the counter stays
  /// put. The caller resets the counter per source file.
  pub fn emit_legacy_second<W: Write>(
    &mut self,
    out: &mut W,
    value: i64,
    style: HexStyle,
  ) -> io::Result<()> {
    let token = hex_token(value, style);
    if self.counter != self.columns - 1 {
      write!(out, "{},", token)?;
      self.counter += 1;
    } else {
      write!(out, "{}", token)?;
    }
    Ok(())
  }

  /// Legacy wrap for the expected stream: `counter -= 8` at the boundary,
  /// then the unconditional `+= 1`.
  pub fn emit_legacy_expected<W: Write>(
    &mut self,
    out: &mut W,
    value: i64,
    style: HexStyle,
  ) -> io::Result<()> {
    let token = hex_token(value, style);
    if self.counter != self.columns - 1 {
      write!(out, "{},", token)?;
    } else {
      writeln!(out, "{},", token)?;
      self.counter -= 8;
    }
    self.counter += 1;
    Ok(())
  }
}
