//! Known Nuvoton Super I/O parts.
//!
//! IDs follow the Linux `nct6775` driver table and are matched with the
//! revision bits masked off.

use crate::types::ChipId;
use serde::Serialize;
use std::fmt;

/// A Super I/O part identified from its device ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SioChip {
    Nct6106,
    Nct6116,
    Nct6775,
    Nct6776,
    Nct6779,
    Nct6791,
    Nct6792,
    Nct6793,
    Nct6795,
    Nct6796,
    Nct6797,
    Nct6798,
    Nct6799,
    /// Nothing answered on the index port (ID read as 0x0000 or 0xFFFF).
    Absent,
    Unknown(ChipId),
}

/// Every known part with the ID family it reports.
pub const KNOWN_CHIPS: &[(SioChip, u16)] = &[
    (SioChip::Nct6106, 0xC450),
    (SioChip::Nct6116, 0xD280),
    (SioChip::Nct6775, 0xB470),
    (SioChip::Nct6776, 0xC330),
    (SioChip::Nct6779, 0xC560),
    (SioChip::Nct6791, 0xC800),
    (SioChip::Nct6792, 0xC910),
    (SioChip::Nct6793, 0xD120),
    (SioChip::Nct6795, 0xD350),
    (SioChip::Nct6796, 0xD420),
    (SioChip::Nct6797, 0xD450),
    (SioChip::Nct6798, 0xD428),
    (SioChip::Nct6799, 0xD800),
];

impl SioChip {
    pub fn from_id(id: ChipId) -> Self {
        if id.is_absent() {
            return Self::Absent;
        }
        KNOWN_CHIPS
            .iter()
            .find(|(_, family)| *family == id.family())
            .map(|(chip, _)| *chip)
            .unwrap_or(Self::Unknown(id))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nct6106 => "Nuvoton NCT6106D",
            Self::Nct6116 => "Nuvoton NCT6116D",
            Self::Nct6775 => "Nuvoton NCT6775F",
            Self::Nct6776 => "Nuvoton NCT6776F",
            Self::Nct6779 => "Nuvoton NCT6779D",
            Self::Nct6791 => "Nuvoton NCT6791D",
            Self::Nct6792 => "Nuvoton NCT6792D",
            Self::Nct6793 => "Nuvoton NCT6793D",
            Self::Nct6795 => "Nuvoton NCT6795D",
            Self::Nct6796 => "Nuvoton NCT6796D",
            Self::Nct6797 => "Nuvoton NCT6797D",
            Self::Nct6798 => "Nuvoton NCT6798D",
            Self::Nct6799 => "Nuvoton NCT6799D",
            Self::Absent => "no chip",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Absent | Self::Unknown(_))
    }
}

impl fmt::Display for SioChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
