//! Super I/O index port newtype.
//!
//! The data port of a Super I/O chip always sits at `index + 1`, so an
//! `IndexPort` can never be `0xFFFF`.

use super::hex::{parse_hex_u16, HexRepr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated Super I/O index port address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "HexRepr", into = "String")]
pub struct IndexPort(u16);

impl IndexPort {
    /// Primary Super I/O index port.
    pub const PRIMARY: Self = Self(0x2E);
    /// Secondary Super I/O index port.
    pub const SECONDARY: Self = Self(0x4E);
    /// Candidates tried when nothing else is configured, in probe order.
    pub const DEFAULT_CANDIDATES: [Self; 2] = [Self::PRIMARY, Self::SECONDARY];

    /// Create an index port, returning None if the data port would overflow.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port < u16::MAX {
            Some(Self(port))
        } else {
            None
        }
    }

    /// The raw index port address.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// The data port paired with this index port.
    #[inline]
    pub const fn data_port(self) -> u16 {
        self.0 + 1
    }
}

impl fmt::Display for IndexPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:#04X}", self.0))
    }
}

impl TryFrom<u16> for IndexPort {
    type Error = IndexPortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(IndexPortError::NoDataPort(value))
    }
}

impl TryFrom<HexRepr> for IndexPort {
    type Error = IndexPortError;

    fn try_from(repr: HexRepr) -> Result<Self, Self::Error> {
        match repr.value() {
            Some(value) => Self::try_from(value),
            None => Err(IndexPortError::InvalidFormat(format!("{:?}", repr))),
        }
    }
}

impl From<IndexPort> for u16 {
    fn from(port: IndexPort) -> Self {
        port.0
    }
}

impl From<IndexPort> for String {
    fn from(port: IndexPort) -> Self {
        port.to_string()
    }
}

impl FromStr for IndexPort {
    type Err = IndexPortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            parse_hex_u16(s).ok_or_else(|| IndexPortError::InvalidFormat(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Error type for index port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexPortError {
    #[error("index port {0:#06X} leaves no room for its data port")]
    NoDataPort(u16),
    #[error("invalid hex port address: {0}")]
    InvalidFormat(String),
}
