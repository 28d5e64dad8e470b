/// How a parsed decimal value is rendered as a hex token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HexStyle {
  /// `0x` followed by the minimal number of lowercase digits.
  #[value(name = "unpadded")]
  Unpadded,
  /// `0x` followed by at least four zero-filled lowercase digits.
  #[value(name = "padded4")]
  Padded4,
}

/// Renders one decimal value as a hex token. Pure: the same value and style
/// always produce the same text. Negative values render as a `-` sign
/// followed by the hex magnitude, so the token parses back to the same value.
pub fn hex_token(value: i64, style: HexStyle) -> String {
  let sign = if value < 0 { "-" } else { "" };
  let magnitude = value.unsigned_abs();
  match style {
    HexStyle::Unpadded => format!("{}0x{:x}", sign, magnitude),
    HexStyle::Padded4 => format!("{}0x{:04x}", sign, magnitude),
  }
}
