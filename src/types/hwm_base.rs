//! Hardware monitor base address read from CR 0x60/0x61 of LDN 0x0B.

use super::hex::HexRepr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// I/O base of the hardware monitor logical device.
///
/// Nuvoton places the HWM's own index/data register pair at `base + 5` and
/// `base + 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HexRepr", into = "String")]
pub struct HwmBase(u16);

impl HwmBase {
    /// Offset of the HWM index register from the base.
    pub const INDEX_OFFSET: u16 = 5;
    /// Offset of the HWM data register from the base.
    pub const DATA_OFFSET: u16 = 6;

    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Firmware left the logical device without an I/O window.
    #[inline]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// HWM index port, or None if the window would wrap past 0xFFFF.
    pub fn index_port(self) -> Option<u16> {
        self.0.checked_add(Self::INDEX_OFFSET)
    }

    /// HWM data port, or None if the window would wrap past 0xFFFF.
    pub fn data_port(self) -> Option<u16> {
        self.0.checked_add(Self::DATA_OFFSET)
    }

    /// HWM index and data ports together, or None if the base is unassigned
    /// or the pair does not fit below 0xFFFF.
    pub fn window(self) -> Option<(u16, u16)> {
        if !self.is_assigned() {
            return None;
        }
        Some((self.index_port()?, self.data_port()?))
    }
}

impl fmt::Display for HwmBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:#06X}", self.0))
    }
}

impl From<HwmBase> for String {
    fn from(base: HwmBase) -> Self {
        base.to_string()
    }
}

impl TryFrom<HexRepr> for HwmBase {
    type Error = String;

    fn try_from(repr: HexRepr) -> Result<Self, Self::Error> {
        repr.value()
            .map(Self)
            .ok_or_else(|| format!("invalid base address: {:?}", repr))
    }
}
