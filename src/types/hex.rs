//! Hexadecimal parsing shared by the port and chip ID newtypes.

use serde::Deserialize;

/// Parse a 16-bit value written in hex.
///
/// Accepts `0x2E`, `0X2E`, `2E` and the assembler-style `2Eh`.
pub(crate) fn parse_hex_u16(s: &str) -> Option<u16> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_suffix('h'))
        .or_else(|| s.strip_suffix('H'))
        .unwrap_or(s);

    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

/// On-disk form of a hex value: either a JSON number or a hex string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HexRepr {
    Number(u16),
    Text(String),
}

impl HexRepr {
    pub fn value(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_hex_u16(s),
        }
    }
}
