//! Chip identity value read from CR 0x20/0x21.

use super::hex::{parse_hex_u16, HexRepr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 16-bit Super I/O device ID.
///
/// The low three bits carry the silicon revision on Nuvoton parts, so two
/// IDs that differ only there name the same chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HexRepr", into = "String")]
pub struct ChipId(u16);

impl ChipId {
    /// Mask selecting the part number bits of a Nuvoton device ID.
    pub const FAMILY_MASK: u16 = 0xFFF8;

    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// ID with the revision bits cleared.
    #[inline]
    pub const fn family(self) -> u16 {
        self.0 & Self::FAMILY_MASK
    }

    /// Silicon revision bits.
    #[inline]
    pub const fn revision(self) -> u8 {
        (self.0 & !Self::FAMILY_MASK) as u8
    }

    /// True when the read came back floating high or pulled low, i.e. no
    /// chip decoded the index port.
    #[inline]
    pub const fn is_absent(self) -> bool {
        self.0 == 0xFFFF || self.0 == 0x0000
    }

    /// Whether `other` names the same part, ignoring revision.
    pub const fn same_family(self, other: ChipId) -> bool {
        self.family() == other.family()
    }
}

impl fmt::Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:#06X}", self.0))
    }
}

impl From<ChipId> for String {
    fn from(id: ChipId) -> Self {
        id.to_string()
    }
}

impl TryFrom<HexRepr> for ChipId {
    type Error = String;

    fn try_from(repr: HexRepr) -> Result<Self, Self::Error> {
        repr.value()
            .map(Self)
            .ok_or_else(|| format!("invalid chip ID: {:?}", repr))
    }
}

impl FromStr for ChipId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_u16(s)
            .map(Self)
            .ok_or_else(|| format!("invalid chip ID: {}", s))
    }
}
